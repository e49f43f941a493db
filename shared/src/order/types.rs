//! Row types for the order form

use crate::models::MenuEntry;

/// Placeholder shown for rows without a product name
pub const PLACEHOLDER_NAME: &str = "Producto";

/// One row of the order form
///
/// Price and name are fixed form data; quantity is the only mutable
/// field and is kept non-negative by every mutation path.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: i64,
    pub name: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

impl ItemRow {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: Some(name.into()),
            price,
            quantity: 0,
        }
    }

    pub fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.nombre.clone(),
            price: entry.precio,
            quantity: 0,
        }
    }

    /// Trimmed display name, falling back to [`PLACEHOLDER_NAME`]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => PLACEHOLDER_NAME,
        }
    }

    /// Whether this row contributes to the order
    pub fn is_selected(&self) -> bool {
        self.quantity > 0
    }
}

/// Parse a typed quantity value
///
/// Absent, non-numeric, and negative input all normalize to 0.
pub fn parse_quantity(raw: &str) -> i32 {
    raw.trim().parse::<i32>().map(|q| q.max(0)).unwrap_or(0)
}
