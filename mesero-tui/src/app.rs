//! Panel state
//!
//! Pure application state the event loop mutates and the `ui` module
//! renders. Calculator and poller results are applied here; no
//! terminal or network code.

use mesero_client::{MesaCard, RefreshUpdate};
use shared::order::{OrderForm, OrderSummary};
use std::time::{Duration, Instant};
use tui_input::Input;

/// Toast visible window
const TOAST_DURATION: Duration = Duration::from_millis(1_400);

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Menu,
    Mesas,
}

/// Current input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing a quantity for the selected row
    Editing,
}

/// A transient notification; re-showing restarts the window
#[derive(Debug, Clone)]
pub struct Toast {
    text: String,
    shown_at: Instant,
}

impl Toast {
    fn new(text: String) -> Self {
        Self {
            text,
            shown_at: Instant::now(),
        }
    }

    fn visible_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) < TOAST_DURATION
    }
}

pub struct App {
    /// The order form and its derived summary
    pub form: OrderForm,
    pub summary: OrderSummary,

    /// Current mesa card grid, replaced atomically on refresh
    pub cards: Vec<MesaCard>,
    /// Mesa opened as the submission target
    pub active_mesa: Option<MesaCard>,

    pub focus: Pane,
    pub input_mode: InputMode,
    pub selected_item: usize,
    pub selected_mesa: usize,
    /// Quantity editor for the selected row
    pub qty_input: Input,

    toast: Option<Toast>,
    pub last_refresh: Option<chrono::DateTime<chrono::Local>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(form: OrderForm) -> Self {
        // initialize the displayed state once at load
        let summary = form.recalculate();
        Self {
            form,
            summary,
            cards: Vec::new(),
            active_mesa: None,
            focus: Pane::default(),
            input_mode: InputMode::default(),
            selected_item: 0,
            selected_mesa: 0,
            qty_input: Input::default(),
            toast: None,
            last_refresh: None,
            should_quit: false,
        }
    }

    /// Apply one successful refresh cycle
    pub fn apply_update(&mut self, update: RefreshUpdate) {
        self.cards = update.cards;
        if !self.cards.is_empty() {
            self.selected_mesa = self.selected_mesa.min(self.cards.len() - 1);
        } else {
            self.selected_mesa = 0;
        }

        for transition in &update.transitions {
            let text = transition.toast_text();
            tracing::info!("{text}");
            self.show_toast(text);
        }

        self.last_refresh = Some(chrono::Local::now());
    }

    pub fn show_toast(&mut self, text: String) {
        self.toast = Some(Toast::new(text));
    }

    /// Toast text while its window is open
    pub fn toast_text(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| t.visible_at(Instant::now()))
            .map(|t| t.text.as_str())
    }

    pub fn selected_item_id(&self) -> Option<i64> {
        self.form.rows().get(self.selected_item).map(|r| r.id)
    }

    /// Adjust the selected row's quantity by `delta`
    pub fn adjust_selected(&mut self, delta: i32) {
        if let Some(id) = self.selected_item_id() {
            self.summary = self.form.adjust_quantity(id, delta);
        }
    }

    /// Begin typing a quantity for the selected row
    pub fn begin_editing(&mut self) {
        if let Some(row) = self.form.rows().get(self.selected_item) {
            self.qty_input = Input::new(row.quantity.to_string());
            self.input_mode = InputMode::Editing;
        }
    }

    /// Commit the typed quantity (invalid text normalizes to 0)
    pub fn commit_editing(&mut self) {
        if let Some(id) = self.selected_item_id() {
            let raw = self.qty_input.value().to_string();
            self.summary = self.form.set_quantity(id, &raw);
        }
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn clear_all(&mut self) {
        self.summary = self.form.clear_all();
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            Pane::Menu => self.selected_item = self.selected_item.saturating_sub(1),
            Pane::Mesas => self.selected_mesa = self.selected_mesa.saturating_sub(1),
        }
    }

    pub fn select_next(&mut self) {
        match self.focus {
            Pane::Menu => {
                if self.selected_item + 1 < self.form.len() {
                    self.selected_item += 1;
                }
            }
            Pane::Mesas => {
                if self.selected_mesa + 1 < self.cards.len() {
                    self.selected_mesa += 1;
                }
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Menu => Pane::Mesas,
            Pane::Mesas => Pane::Menu,
        };
    }

    /// Open the selected mesa card as the submission target
    pub fn open_selected_mesa(&mut self) {
        if let Some(card) = self.cards.get(self.selected_mesa).cloned() {
            tracing::info!(mesa = %card.numero, href = %card.href, "Mesa abierta");
            self.active_mesa = Some(card);
        }
    }
}
