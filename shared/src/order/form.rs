//! Order form state and operations

use super::summary::OrderSummary;
use super::types::{ItemRow, parse_quantity};
use crate::models::MenuEntry;
use crate::money::to_decimal;
use rust_decimal::Decimal;

/// The menu order form: a fixed set of rows with mutable quantities
///
/// Every mutation returns the freshly recomputed summary so the
/// rendering layer can apply it in the same step.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    rows: Vec<ItemRow>,
}

impl OrderForm {
    pub fn new(rows: Vec<ItemRow>) -> Self {
        Self { rows }
    }

    pub fn from_menu(entries: &[MenuEntry]) -> Self {
        Self {
            rows: entries.iter().map(ItemRow::from_entry).collect(),
        }
    }

    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Recompute the summary from current row state
    ///
    /// Rows with quantity > 0 contribute their quantity to the count,
    /// price x quantity to the total, and one descriptor line.
    pub fn recalculate(&self) -> OrderSummary {
        let mut count: i64 = 0;
        let mut total = Decimal::ZERO;
        let mut lines = Vec::new();

        for row in &self.rows {
            if row.is_selected() {
                count += i64::from(row.quantity);
                total += to_decimal(row.price) * Decimal::from(row.quantity);
                lines.push(format!("{}x {}", row.quantity, row.display_name()));
            }
        }

        OrderSummary { count, total, lines }
    }

    /// Add `delta` to one row's quantity, clamping at 0
    ///
    /// Unknown ids mutate nothing and just return the current summary.
    pub fn adjust_quantity(&mut self, item_id: i64, delta: i32) -> OrderSummary {
        if let Some(row) = self.row_mut(item_id) {
            row.quantity = row.quantity.saturating_add(delta).max(0);
        }
        self.recalculate()
    }

    /// Overwrite one row's quantity from typed input
    ///
    /// Invalid and negative text normalizes to 0.
    pub fn set_quantity(&mut self, item_id: i64, raw: &str) -> OrderSummary {
        if let Some(row) = self.row_mut(item_id) {
            row.quantity = parse_quantity(raw);
        }
        self.recalculate()
    }

    /// Zero every row's quantity
    pub fn clear_all(&mut self) -> OrderSummary {
        for row in &mut self.rows {
            row.quantity = 0;
        }
        self.recalculate()
    }

    fn row_mut(&mut self, item_id: i64) -> Option<&mut ItemRow> {
        self.rows.iter_mut().find(|r| r.id == item_id)
    }
}
