//! Derived order summary

use crate::money;
use rust_decimal::Decimal;

/// Hint shown once at least one item is selected
pub const HINT_READY: &str = "Listo para enviar ✅";
/// Hint shown while the form is empty
pub const HINT_EMPTY: &str = "Selecciona al menos 1 producto";

const SUMMARY_PREFIX: &str = "Resumen: ";
const SUMMARY_SEPARATOR: &str = " • ";

/// Snapshot of the order form totals, recomputed on every change
///
/// A pure value object: the rendering layer reads its display
/// accessors and applies them. Computing it twice over unchanged rows
/// yields an identical summary.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderSummary {
    /// Sum of quantities over selected rows
    pub count: i64,
    /// Sum of price x quantity over selected rows
    pub total: Decimal,
    /// One `"{qty}x {name}"` descriptor per selected row, in row order
    pub lines: Vec<String>,
}

impl OrderSummary {
    /// Displayed item count
    pub fn count_display(&self) -> String {
        self.count.to_string()
    }

    /// Total formatted as whole Colombian pesos, e.g. `"$28.500"`
    pub fn total_display(&self) -> String {
        money::format_cop(self.total)
    }

    /// Joined summary line, or empty when nothing is selected
    pub fn summary_line(&self) -> String {
        if self.lines.is_empty() {
            String::new()
        } else {
            format!("{}{}", SUMMARY_PREFIX, self.lines.join(SUMMARY_SEPARATOR))
        }
    }

    /// Readiness hint; reflects exactly the submit condition
    pub fn hint(&self) -> &'static str {
        if self.can_submit() { HINT_READY } else { HINT_EMPTY }
    }

    /// Submission is allowed iff at least one item is selected
    pub fn can_submit(&self) -> bool {
        self.count > 0
    }
}
