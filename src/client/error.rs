//! Error types for the Yummly client.

use thiserror::Error;

/// Result type alias for client operations.
pub type YummlyResult<T> = Result<T, YummlyError>;

/// Errors surfaced by [`YummlyClient`](crate::client::YummlyClient).
///
/// Timeouts are retried transparently up to the configured count before
/// surfacing as [`YummlyError::Timeout`]; every other condition fails the
/// call immediately.
#[derive(Error, Debug)]
pub enum YummlyError {
    /// HTTP transport failure (connection refused, decode error, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body was not valid JSON for the expected type.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the backend
        message: String,
    },

    /// Metadata key outside the recognized set.
    #[error("unknown metadata key: {0}")]
    UnknownMetadata(String),

    /// Metadata endpoint returned something other than the expected
    /// callback-wrapped payload.
    #[error("malformed metadata payload: {0}")]
    Jsonp(String),

    /// All configured retries timed out without a response.
    #[error("request timed out after {attempts} retries")]
    Timeout {
        /// Number of retries performed before giving up
        attempts: u32,
    },
}

impl YummlyError {
    /// Create an API response error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error is a retry-exhausted timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// The HTTP status code, if the backend produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is a not-found response for an unknown identifier.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
