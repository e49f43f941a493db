//! Data models
//!
//! Wire types shared between the panel crates. `MesaRecord` mirrors the
//! server's `/mesas.json` payload; `MenuEntry` mirrors one row of the
//! rendered menu form. All IDs are `i64`.

pub mod mesa;
pub mod producto;

// Re-exports
pub use mesa::*;
pub use producto::*;
