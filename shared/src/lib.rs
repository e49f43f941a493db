//! Shared types for the mesero panel
//!
//! Domain types and pure logic used by the client and TUI crates:
//! mesa records, menu items, the order calculator, and COP money
//! formatting. No I/O lives here.

pub mod models;
pub mod money;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Calculator re-exports (for convenient access)
pub use order::{ItemRow, OrderForm, OrderSummary};
