//! Project-context validation.
//!
//! An analysis payload embeds the project identity it was computed for.
//! Right after a project switch the backend's selected-project state may
//! not have converged yet, so a mismatch triggers a re-fetch after a short
//! delay — but only a bounded number of times. When the bound is exhausted
//! the caller gets a terminal context-unavailable error instead of looping
//! forever.

use std::time::Duration;

use risk_config::FetchConfig;
use risk_core::ProjectId;

use crate::AnalysisClient;
use crate::endpoints;
use crate::error::ClientError;
use crate::wire::SelectedProjectResponse;

/// Outcome of comparing a payload's embedded identity against the
/// expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextCheck {
    /// Identity matches, or the payload embeds no identity to check.
    Match,
    /// Payload was computed for a different project.
    Mismatch { got: String },
}

/// Compare a payload's embedded project identity against the expected one.
///
/// A payload without an embedded identity passes through: there is nothing
/// to contradict the expectation, and the validation layer downstream
/// still gates what is displayable.
#[must_use]
pub fn check_context(embedded: Option<&str>, expected: &ProjectId) -> ContextCheck {
    match embedded {
        Some(got) if got != expected.full_name() => ContextCheck::Mismatch {
            got: got.to_string(),
        },
        _ => ContextCheck::Match,
    }
}

/// Fetches the selected-project payload and verifies it belongs to the
/// expected project, re-fetching a bounded number of times on mismatch.
pub struct ProjectContextValidator {
    limit: u32,
    delay: Duration,
}

impl ProjectContextValidator {
    #[must_use]
    pub fn new(policy: &FetchConfig) -> Self {
        Self {
            // At least one attempt, whatever the config says.
            limit: policy.context_retry_limit.max(1),
            delay: Duration::from_millis(policy.context_retry_delay_ms),
        }
    }

    /// Fetch `GET /api/projects/selected` until the payload's embedded
    /// identity matches `expected` or the attempt bound is exhausted.
    ///
    /// # Errors
    ///
    /// Propagates transport errors from the underlying fetch; returns
    /// [`ClientError::ContextUnavailable`] once the bound is exhausted.
    pub async fn fetch_selected(
        &self,
        client: &AnalysisClient,
        expected: &ProjectId,
    ) -> Result<SelectedProjectResponse, ClientError> {
        for attempt in 1..=self.limit {
            let resp: SelectedProjectResponse = client.get_json(endpoints::SELECTED).await?;
            match check_context(resp.embedded_project(), expected) {
                ContextCheck::Match => return Ok(resp),
                ContextCheck::Mismatch { got } => {
                    tracing::warn!(
                        expected = %expected,
                        got,
                        attempt,
                        limit = self.limit,
                        "project context mismatch; re-fetching",
                    );
                    if attempt < self.limit {
                        tokio::time::sleep(self.delay).await;
                    }
                }
            }
        }
        Err(ClientError::ContextUnavailable {
            expected: expected.full_name(),
            attempts: self.limit,
        })
    }
}
