//! Client error types.
//!
//! The display strings here are part of the contract with the view layer:
//! non-2xx responses render as `HTTP <status>: <statusText>` and timeouts
//! as `Request timeout after <N>ms`, so views can tell the two apart.

use thiserror::Error;

/// Errors that can occur when talking to the analysis backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Backend returned a non-success status code.
    #[error("HTTP {status}: {status_text}")]
    Api { status: u16, status_text: String },

    /// The request exceeded the wall-time ceiling. Never retried.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Connection-level failure (DNS, refused, reset).
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed as the expected JSON shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The backend kept returning payloads for a different project and the
    /// re-fetch bound was exhausted.
    #[error("project context unavailable: expected {expected} after {attempts} attempts")]
    ContextUnavailable { expected: String, attempts: u32 },

    /// The backend acknowledged the request but refused it
    /// (`success: false`).
    #[error("server rejected request{}", reason.as_ref().map(|r| format!(": {r}")).unwrap_or_default())]
    ServerRejection { reason: Option<String> },
}

impl ClientError {
    /// Whether the resilient fetcher may retry after this error.
    /// Timeouts fail fast; everything transport-shaped is retryable.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::Network(_) | Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn api_error_renders_status_and_text() {
        let err = ClientError::Api {
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn timeout_renders_budget() {
        let err = ClientError::Timeout { timeout_ms: 30_000 };
        assert_eq!(err.to_string(), "Request timeout after 30000ms");
    }

    #[test]
    fn timeout_is_not_retryable() {
        assert!(!ClientError::Timeout { timeout_ms: 1 }.is_retryable());
        assert!(
            ClientError::Api {
                status: 502,
                status_text: "Bad Gateway".to_string()
            }
            .is_retryable()
        );
    }
}
