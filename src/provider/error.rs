//! Error types for quote providers.

use thiserror::Error;

/// Why a provider attempt produced no quote.
///
/// These never reach the UI: the chain logs them and moves on.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request could not be sent or the body could not be read.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },

    /// The body was not JSON of the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The endpoint returned zero usable candidates.
    #[error("response contained no quotes")]
    EmptyResult,

    /// The attempt exceeded the per-provider timeout.
    #[error("timed out after {millis}ms")]
    Timeout { millis: u64 },

    /// The provider lacks required configuration (e.g. an API key).
    #[error("not configured: {reason}")]
    NotConfigured { reason: String },
}

impl ProviderError {
    /// Stable identifier for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Network(_) => "network_error",
            ProviderError::HttpStatus { .. } => "http_status_error",
            ProviderError::MalformedResponse(_) => "malformed_response",
            ProviderError::EmptyResult => "empty_result",
            ProviderError::Timeout { .. } => "timeout",
            ProviderError::NotConfigured { .. } => "not_configured",
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::MalformedResponse(err.to_string())
    }
}
