//! Mesero Panel - terminal UI for the waiter
//!
//! Left pane: the order form (quantities, running total, submit).
//! Right pane: the live mesa grid refreshed by the status poller.
//! Run: `mesero-tui` (reads `SERVER_URL`, `MENU_PATH`, `LOG_DIR`, `.env`)

mod app;
mod logger;
mod menu;
mod ui;

use app::{App, InputMode, Pane};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mesero_client::{ClientConfig, ClientResult, MesaPoller, PanelClient, RefreshUpdate, SubmitOutcome};
use ratatui::prelude::*;
use shared::order::{HINT_EMPTY, OrderForm};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tui_input::backend::crossterm::EventHandler;

/// Outcome of a background submission task
struct SubmitReport {
    mesa: String,
    result: ClientResult<SubmitOutcome>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logger::init(std::env::var("LOG_DIR").ok().as_deref())?;

    let config = ClientConfig::from_env();
    tracing::info!(server = %config.base_url, "Mesero panel iniciando");

    let menu_path = std::env::var("MENU_PATH").unwrap_or_else(|_| "menu.json".into());
    let entries = match menu::load_menu(Path::new(&menu_path)) {
        Ok(entries) => entries,
        Err(e) => {
            // an empty form still renders; the waiter sees the mesas
            tracing::warn!(error = %e, "Menú no disponible, formulario vacío");
            Vec::new()
        }
    };

    let client = config.build_client()?;
    let poller = MesaPoller::new(client.clone(), config.poll_interval);

    let (update_tx, mut update_rx) = mpsc::channel(16);
    let cancel = CancellationToken::new();
    tokio::spawn(poller.run(update_tx, cancel.clone()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(OrderForm::from_menu(&entries));
    let res = run_app(&mut terminal, &mut app, &client, &mut update_rx).await;

    cancel.cancel();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    client: &PanelClient,
    update_rx: &mut mpsc::Receiver<RefreshUpdate>,
) -> anyhow::Result<()> {
    let (submit_tx, mut submit_rx) = mpsc::channel::<SubmitReport>(4);

    loop {
        terminal.draw(|f| ui::ui(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            match app.input_mode {
                InputMode::Normal => handle_normal_key(app, key.code, client, &submit_tx),
                InputMode::Editing => match key.code {
                    KeyCode::Enter => app.commit_editing(),
                    KeyCode::Esc => app.cancel_editing(),
                    _ => {
                        app.qty_input.handle_event(&Event::Key(key));
                    }
                },
            }
        }

        // Poll for refresh updates and submission outcomes (non-blocking)
        while let Ok(update) = update_rx.try_recv() {
            app.apply_update(update);
        }
        while let Ok(report) = submit_rx.try_recv() {
            apply_submit_report(app, report);
        }
    }
}

fn handle_normal_key(
    app: &mut App,
    code: KeyCode,
    client: &PanelClient,
    submit_tx: &mpsc::Sender<SubmitReport>,
) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char('+') => app.adjust_selected(1),
        KeyCode::Char('-') => app.adjust_selected(-1),
        KeyCode::Char('e') => {
            if app.focus == Pane::Menu {
                app.begin_editing();
            }
        }
        KeyCode::Char('c') => app.clear_all(),
        KeyCode::Enter => {
            if app.focus == Pane::Mesas {
                app.open_selected_mesa();
            }
        }
        KeyCode::Char('s') => submit_order(app, client, submit_tx),
        _ => {}
    }
}

/// Kick off a submission for the open mesa
///
/// The empty-order guard lives in the client: it reports `Blocked`
/// without sending anything.
fn submit_order(app: &mut App, client: &PanelClient, submit_tx: &mpsc::Sender<SubmitReport>) {
    let Some(mesa) = app.active_mesa.clone() else {
        tracing::warn!("No hay mesa abierta para enviar el pedido");
        app.show_toast("Abre una mesa primero".into());
        return;
    };

    let rows = app.form.rows().to_vec();
    let summary = app.summary.clone();
    let client = client.clone();
    let tx = submit_tx.clone();

    tokio::spawn(async move {
        let result = client.submit_order(mesa.id, &rows, &summary).await;
        let _ = tx
            .send(SubmitReport {
                mesa: mesa.numero,
                result,
            })
            .await;
    });
}

fn apply_submit_report(app: &mut App, report: SubmitReport) {
    match report.result {
        Ok(SubmitOutcome::Sent) => {
            app.show_toast(format!("Pedido enviado a Mesa {}", report.mesa));
            // start a fresh form for the next pedido
            app.clear_all();
        }
        Ok(SubmitOutcome::Blocked) => {
            app.show_toast(HINT_EMPTY.to_string());
        }
        Err(e) => {
            tracing::error!(error = %e, "No se pudo enviar el pedido");
            app.show_toast("Error enviando el pedido".into());
        }
    }
}
