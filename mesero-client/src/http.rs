//! HTTP client for the restaurant server

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use shared::models::MesasSnapshot;
use shared::order::{ItemRow, OrderSummary};

/// Fixed path of the table status endpoint
pub const MESAS_PATH: &str = "mesas.json";

/// Source of mesa status snapshots
///
/// The poller only depends on this seam, so tests can drive it with a
/// scripted source instead of a live server.
#[async_trait]
pub trait StatusSource: Send + Sync {
    async fn fetch_mesas(&self) -> ClientResult<MesasSnapshot>;
}

/// What happened to a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was posted to the server
    Sent,
    /// No item selected; nothing was sent
    Blocked,
}

/// Network client for the waiter panel
#[derive(Debug, Clone)]
pub struct PanelClient {
    client: Client,
    base_url: String,
}

impl PanelClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Post the order form for a mesa, guarded by the current summary
    ///
    /// With nothing selected the submission is blocked before any
    /// request is made. Otherwise the form posts exactly what it
    /// carries: one `producto_{id}` field per row.
    pub async fn submit_order(
        &self,
        mesa_id: i64,
        rows: &[ItemRow],
        summary: &OrderSummary,
    ) -> ClientResult<SubmitOutcome> {
        if !summary.can_submit() {
            tracing::debug!(mesa_id, "Pedido vacío, no se envía");
            return Ok(SubmitOutcome::Blocked);
        }

        let fields: Vec<(String, String)> = rows
            .iter()
            .map(|row| (format!("producto_{}", row.id), row.quantity.to_string()))
            .collect();

        let url = format!("{}/mesa/{}", self.base_url, mesa_id);
        let response = self.client.post(&url).form(&fields).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        tracing::info!(mesa_id, items = summary.count, "Pedido enviado");
        Ok(SubmitOutcome::Sent)
    }
}

#[async_trait]
impl StatusSource for PanelClient {
    async fn fetch_mesas(&self) -> ClientResult<MesasSnapshot> {
        let url = format!("{}/{}", self.base_url, MESAS_PATH);
        let response = self
            .client
            .get(&url)
            // always fresh data; intermediaries must not cache
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
