//! Mesa status poller
//!
//! Refreshes the mesa card grid on a fixed interval and detects state
//! transitions against the previous-state map. The map lives on the
//! poller value: initialized empty, mutated only by `refresh`, gone
//! when the poller is dropped.

use crate::error::ClientResult;
use crate::http::StatusSource;
use shared::models::{MesaEstado, MesaRecord, MesasSnapshot};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// One rendered card of the mesa grid
#[derive(Debug, Clone, PartialEq)]
pub struct MesaCard {
    pub id: i64,
    pub numero: String,
    pub estado: MesaEstado,
    /// Link target for opening the mesa, keyed by its identifier
    pub href: String,
}

impl MesaCard {
    fn from_record(record: &MesaRecord) -> Self {
        Self {
            id: record.id,
            numero: record.numero.clone(),
            estado: record.estado(),
            href: format!("/mesa/{}", record.id),
        }
    }

    /// Label of the status pill
    pub fn pill_label(&self) -> &'static str {
        self.estado.label()
    }
}

/// A detected occupancy change for one mesa
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub mesa_id: i64,
    pub numero: String,
    pub from: MesaEstado,
    pub to: MesaEstado,
}

impl Transition {
    /// Toast text, e.g. `"Mesa 5: ocupada → libre"`
    pub fn toast_text(&self) -> String {
        format!("Mesa {}: {} → {}", self.numero, self.from, self.to)
    }
}

/// Result of one successful refresh cycle
///
/// `cards` replaces the whole grid atomically; `transitions` carry the
/// toasts to show, in record order.
#[derive(Debug, Clone, Default)]
pub struct RefreshUpdate {
    pub cards: Vec<MesaCard>,
    pub transitions: Vec<Transition>,
}

/// Polls a [`StatusSource`] and tracks per-mesa state across cycles
pub struct MesaPoller<S> {
    source: S,
    interval: Duration,
    previous: HashMap<i64, MesaEstado>,
}

impl<S: StatusSource> MesaPoller<S> {
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source,
            interval,
            previous: HashMap::new(),
        }
    }

    /// Last state recorded for a mesa, if it has been observed
    pub fn last_seen(&self, mesa_id: i64) -> Option<MesaEstado> {
        self.previous.get(&mesa_id).copied()
    }

    /// Fetch a fresh snapshot and derive cards and transitions
    ///
    /// On failure the cycle is abandoned: the previous-state map is
    /// untouched and the error is handed to the caller to log.
    pub async fn refresh(&mut self) -> ClientResult<RefreshUpdate> {
        let snapshot = self.source.fetch_mesas().await?;
        Ok(self.apply(snapshot))
    }

    fn apply(&mut self, snapshot: MesasSnapshot) -> RefreshUpdate {
        let cards = snapshot.mesas.iter().map(MesaCard::from_record).collect();

        let mut transitions = Vec::new();
        for mesa in &snapshot.mesas {
            let now = mesa.estado();
            if let Some(&prev) = self.previous.get(&mesa.id)
                && prev != now
            {
                transitions.push(Transition {
                    mesa_id: mesa.id,
                    numero: mesa.numero.clone(),
                    from: prev,
                    to: now,
                });
            }
            // first observation records state, emits nothing
            self.previous.insert(mesa.id, now);
        }

        RefreshUpdate { cards, transitions }
    }

    /// Run the polling loop until cancelled
    ///
    /// The first refresh fires immediately, then one per interval.
    /// Ticks are serialized: a slow refresh delays the next tick
    /// instead of overlapping it. Failures are logged and the loop
    /// keeps its schedule.
    pub async fn run(mut self, updates: mpsc::Sender<RefreshUpdate>, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            match self.refresh().await {
                Ok(update) => {
                    if updates.send(update).await.is_err() {
                        // UI side is gone
                        break;
                    }
                }
                Err(e) => tracing::warn!(error = %e, "Error refrescando mesas"),
            }
        }

        tracing::debug!("Mesa poller stopped");
    }
}
