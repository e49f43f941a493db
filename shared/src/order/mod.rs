//! Order form calculator
//!
//! Pure view-model for the menu order form:
//! - Rows: mutable per-item quantities over fixed price/name data
//! - Summary: count, total, and item descriptors derived on demand
//!
//! The rendering layer applies summaries to the screen; nothing here
//! touches a terminal or the network.

pub mod form;
pub mod summary;
pub mod types;

// Re-exports
pub use form::OrderForm;
pub use summary::{HINT_EMPTY, HINT_READY, OrderSummary};
pub use types::{ItemRow, PLACEHOLDER_NAME, parse_quantity};
