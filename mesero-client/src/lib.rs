//! Mesero Client - network layer for the waiter panel
//!
//! Talks to the restaurant server: polls `/mesas.json` for table
//! occupancy and posts guarded order submissions. The poller owns the
//! previous-state map used for transition toasts.

pub mod config;
pub mod error;
pub mod http;
pub mod poller;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{PanelClient, StatusSource, SubmitOutcome};
pub use poller::{MesaCard, MesaPoller, RefreshUpdate, Transition};
