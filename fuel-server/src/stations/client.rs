//! Upstream fuel-price API client.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::StationError;
use super::payload::station_list;

/// Default upstream endpoint (Spanish Ministry, land-based stations).
pub const DEFAULT_URL: &str = "https://sedeaplicaciones.minetur.gob.es/ServiciosRESTCarburantes/PreciosCarburantes/EstacionesTerrestres/";

/// Default `User-Agent` sent upstream.
pub const DEFAULT_USER_AGENT: &str = concat!("fuel-server/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest upstream error body kept in a [`StationError::Upstream`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct StationClientConfig {
    /// Full URL of the dataset endpoint
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// `User-Agent` header value
    pub user_agent: String,
}

impl StationClientConfig {
    /// Create a config pointing at the default endpoint.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Set a custom endpoint URL (for testing or mirrors).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for StationClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A raw upstream answer: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for the fuel-price dataset endpoint.
///
/// Holds no per-request state and is cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct StationClient {
    http: reqwest::Client,
    url: reqwest::Url,
    timeout_secs: u64,
}

impl StationClient {
    /// Create a new client.
    pub fn new(config: StationClientConfig) -> Result<Self, StationError> {
        let url = reqwest::Url::parse(&config.url).map_err(|e| StationError::InvalidConfig {
            message: format!("invalid upstream URL {:?}: {e}", config.url),
        })?;

        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| StationError::InvalidConfig {
                message: "invalid User-Agent header value".to_string(),
            })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// The endpoint this client fetches.
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Fetch the endpoint and return whatever it answered.
    ///
    /// Only transport failures are errors; any HTTP status is returned as-is.
    pub async fn fetch(&self) -> Result<UpstreamResponse, StationError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        debug!(status, bytes = body.len(), "upstream responded");

        Ok(UpstreamResponse { status, body })
    }

    /// Fetch the endpoint, treating any non-2xx status as an error.
    pub async fn fetch_raw(&self) -> Result<String, StationError> {
        let response = self.fetch().await?;

        if !response.is_success() {
            warn!(status = response.status, "upstream returned error status");
            return Err(StationError::Upstream {
                status: response.status,
                message: response.body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        Ok(response.body)
    }

    /// Fetch and decode the station list.
    ///
    /// The list may arrive as a bare array or wrapped in `ListaEESSPrecio`.
    pub async fn fetch_stations(&self) -> Result<Vec<Value>, StationError> {
        let body = self.fetch_raw().await?;

        let payload: Value = serde_json::from_str(&body).map_err(|e| StationError::Json {
            message: e.to_string(),
        })?;

        Ok(station_list(payload))
    }

    fn transport_error(&self, err: reqwest::Error) -> StationError {
        if err.is_timeout() {
            warn!(secs = self.timeout_secs, "upstream request timed out");
            StationError::Timeout {
                secs: self.timeout_secs,
            }
        } else {
            warn!(error = %err, "upstream request failed");
            StationError::Http(err)
        }
    }
}
