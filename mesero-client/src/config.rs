//! Client configuration

use std::time::Duration;

/// How often the mesa grid is refreshed
const DEFAULT_POLL_INTERVAL_MS: u64 = 2_500;
/// Per-request timeout
const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// The restaurant server's default address
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Configuration for connecting to the restaurant server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Interval between mesa status refreshes
    pub poll_interval: Duration,

    /// Request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with default polling and timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Load configuration from environment variables
    ///
    /// `SERVER_URL`, `POLL_INTERVAL_MS`, `REQUEST_TIMEOUT_MS`;
    /// unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let poll_interval = std::env::var("POLL_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);
        let timeout = std::env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            base_url,
            poll_interval: Duration::from_millis(poll_interval),
            timeout: Duration::from_millis(timeout),
        }
    }

    /// Set the polling interval
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_client(&self) -> crate::ClientResult<crate::PanelClient> {
        crate::PanelClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}
