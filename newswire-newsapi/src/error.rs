//! Error types for upstream calls

use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while calling the upstream API
///
/// These never escape the client: `NewsApiClient::forward` converts each
/// variant into the 500 error envelope.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP request failed before a response arrived (DNS, connect, timeout)
    #[error("Request failed: {0}")]
    Request(String),

    /// Upstream answered with a non-success status
    #[error("Upstream returned status {status}")]
    ErrorResponse {
        /// HTTP status code from the upstream
        status: u16,
        /// Error body: parsed JSON when possible, else the raw text
        body: Value,
    },

    /// Upstream answered 2xx but the body was not the expected shape
    #[error("Malformed upstream body: {0}")]
    MalformedBody(String),
}

impl UpstreamError {
    /// Produce the envelope `error` payload: the upstream body when one was
    /// received, otherwise a plain description string
    pub fn into_detail(self) -> Value {
        match self {
            UpstreamError::ErrorResponse { body, .. } => body,
            other => Value::String(other.to_string()),
        }
    }
}
