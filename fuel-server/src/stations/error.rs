//! Upstream station API error types.

/// Errors that can occur when fetching the station dataset.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream did not answer within the configured timeout
    #[error("upstream timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Upstream answered with a non-2xx status
    #[error("upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Upstream body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be built from its configuration
    #[error("invalid client config: {message}")]
    InvalidConfig { message: String },
}
