//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check so fetch paths stay focused on
//! request construction and response mapping. The error string format
//! (`HTTP <status>: <statusText>`) is the contract views render.

use crate::error::ClientError;

/// Check a response for a non-success status.
///
/// Returns the response unchanged on success; otherwise
/// [`ClientError::Api`] carrying the status code and its canonical reason
/// phrase.
pub fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ClientError::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        })
    }
}
