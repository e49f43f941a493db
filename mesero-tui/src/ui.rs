//! Widget rendering
//!
//! Applies the current [`App`] state to the frame. All strings come
//! from the state or the shared display accessors; nothing here
//! computes order math.

use crate::app::{App, InputMode, Pane};
use mesero_client::MesaCard;
use ratatui::{prelude::*, widgets::*};
use shared::money;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content (Pedido + Mesas)
            Constraint::Length(8), // Logs
            Constraint::Length(1), // Toast / key help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_pedido(f, app, main_chunks[0]);
    render_mesas(f, app, main_chunks[1]);
    render_logs(f, chunks[2]);
    render_footer(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mesa = match &app.active_mesa {
        Some(card) => Span::styled(
            format!(" Mesa {} ", card.numero),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(" Sin mesa abierta ", Style::default().fg(Color::DarkGray)),
    };

    let refreshed = match &app.last_refresh {
        Some(at) => format!(" Actualizado {} ", at.format("%H:%M:%S")),
        None => " Esperando datos... ".to_string(),
    };

    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Mesero Panel "),
        Span::raw("| "),
        mesa,
        Span::raw("| "),
        Span::styled(refreshed, Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn render_pedido(f: &mut Frame, app: &App, area: Rect) {
    let pedido_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(5)])
        .split(area);

    let focused = app.focus == Pane::Menu;
    let border = if focused { Color::Yellow } else { Color::White };

    let items: Vec<ListItem> = app
        .form
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = focused && i == app.selected_item;
            let editing = selected && app.input_mode == InputMode::Editing;

            let qty_text = if editing {
                format!("[{}]", app.qty_input.value())
            } else {
                format!("{:>3}", row.quantity)
            };
            let qty_style = if editing {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else if row.quantity > 0 {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let name_style = if selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(qty_text, qty_style),
                Span::raw(" x "),
                Span::styled(format!("{:<24}", row.display_name()), name_style),
                Span::styled(
                    money::format_cop(money::to_decimal(row.price)),
                    Style::default().fg(Color::Cyan),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Pedido ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(list, pedido_chunks[0]);

    // Summary footer: count, total, hint, resumen line
    let hint_style = if app.summary.can_submit() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };
    let send_style = if app.summary.can_submit() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    };

    let summary_text = vec![
        Line::from(vec![
            Span::raw("Items: "),
            Span::styled(
                app.summary.count_display(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Total: "),
            Span::styled(
                app.summary.total_display(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled("[s] Enviar pedido", send_style),
        ]),
        Line::from(Span::styled(app.summary.hint(), hint_style)),
        Line::from(Span::styled(
            app.summary.summary_line(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let summary = Paragraph::new(summary_text)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(summary, pedido_chunks[1]);
}

fn render_mesas(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Pane::Mesas;
    let border = if focused { Color::Yellow } else { Color::Magenta };

    let cards: Vec<ListItem> = app
        .cards
        .iter()
        .enumerate()
        .map(|(i, card)| mesa_card_item(card, focused && i == app.selected_mesa))
        .collect();

    let list = List::new(cards).block(
        Block::default()
            .title(format!(" Mesas ({}) ", app.cards.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(list, area);
}

fn mesa_card_item(card: &MesaCard, selected: bool) -> ListItem<'static> {
    let pill_style = if card.estado.is_ocupada() {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };

    let title_style = if selected {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    ListItem::new(vec![
        Line::from(Span::styled(format!("Mesa {}", card.numero), title_style)),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("● {}", card.pill_label()), pill_style),
            Span::raw("  "),
            Span::styled("Enter para abrir", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::raw(" ")),
    ])
}

fn render_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White));
    f.render_widget(logs, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    if let Some(text) = app.toast_text() {
        let toast = Paragraph::new(Span::styled(
            format!(" {text} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        f.render_widget(toast, area);
        return;
    }

    let help = match app.input_mode {
        InputMode::Editing => "Escribe la cantidad | Enter confirma | Esc cancela",
        InputMode::Normal => {
            "Tab panel | ↑↓ mover | +/- cantidad | e editar | c limpiar | Enter abrir mesa | s enviar | q salir"
        }
    };
    let footer = Paragraph::new(Span::styled(help, Style::default().fg(Color::DarkGray)));
    f.render_widget(footer, area);
}
