//! Resilient fetch: timeout, bounded retry, linear backoff.

use std::time::Duration;

use risk_core::{FetchResult, Project, ProjectId};
use serde::de::DeserializeOwned;

use crate::AnalysisClient;
use crate::endpoints::{self, Section};
use crate::error::ClientError;
use crate::http::check_status;
use crate::wire::{AnalyzeResponse, ProjectRecord, SelectProjectRequest};

impl AnalysisClient {
    /// Perform one logical GET with the configured resilience policy.
    ///
    /// A request that exceeds the wall-time ceiling fails fast with
    /// [`ClientError::Timeout`] and is not retried. Any other failure is
    /// retried up to `retry_limit` additional times, sleeping
    /// `backoff_ms * attempt` before each retry.
    ///
    /// # Errors
    ///
    /// Returns the last observed [`ClientError`] once the retry budget is
    /// exhausted.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base, endpoint);
        let budget = Duration::from_millis(self.policy.timeout_ms);
        let mut last_error = None;

        for attempt in 0..=self.policy.retry_limit {
            if attempt > 0 {
                let backoff = Duration::from_millis(self.policy.backoff_ms * u64::from(attempt));
                tokio::time::sleep(backoff).await;
            }

            match tokio::time::timeout(budget, self.attempt::<T>(&url)).await {
                Err(_elapsed) => {
                    return Err(ClientError::Timeout {
                        timeout_ms: self.policy.timeout_ms,
                    });
                }
                Ok(Ok(data)) => return Ok(data),
                Ok(Err(err)) if err.is_retryable() => {
                    tracing::warn!(endpoint, attempt, %err, "fetch attempt failed");
                    last_error = Some(err);
                }
                Ok(Err(err)) => return Err(err),
            }
        }

        Err(last_error
            .unwrap_or_else(|| ClientError::Network("request failed after retries".to_string())))
    }

    async fn attempt<T: DeserializeOwned>(&self, url: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        let resp = check_status(resp)?;
        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Fetch an endpoint, resolving every failure mode into an explicit
    /// [`FetchResult`]. This never returns an error to its caller.
    pub async fn fetch<T: DeserializeOwned>(&self, endpoint: &str) -> FetchResult<T> {
        match self.get_json(endpoint).await {
            Ok(data) => FetchResult::success(data),
            Err(err) => FetchResult::failure(err.to_string()),
        }
    }

    /// Fetch a section-scoped endpoint with query parameters. Each section
    /// fetches independently of the others.
    pub async fn fetch_section<T: DeserializeOwned>(
        &self,
        section: Section,
        params: &[(&str, &str)],
    ) -> FetchResult<T> {
        self.fetch(&endpoints::with_params(section.endpoint(), params))
            .await
    }

    /// List discovered repositories.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or if a record carries
    /// a malformed project identifier.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let records: Vec<ProjectRecord> = self.get_json(endpoints::PROJECTS).await?;
        records.into_iter().map(ProjectRecord::into_project).collect()
    }

    /// Notify the backend of the selected project so subsequent
    /// selected-project queries resolve consistently.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success
    /// status. Callers treat this as best-effort.
    pub async fn post_selected(&self, project: &ProjectId) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base, endpoints::SELECTED);
        let body = SelectProjectRequest {
            full_name: project.full_name(),
        };
        let budget = Duration::from_millis(self.policy.timeout_ms);
        let send = async {
            let resp = self
                .http
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            check_status(resp)?;
            Ok(())
        };
        tokio::time::timeout(budget, send)
            .await
            .map_err(|_| ClientError::Timeout {
                timeout_ms: self.policy.timeout_ms,
            })?
    }

    /// Request analysis of a repository.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ServerRejection`] when the backend answers
    /// `success: false`; transport errors otherwise. The rejection is
    /// scoped to this action only.
    pub async fn analyze(&self, project: &ProjectId) -> Result<(), ClientError> {
        let url = format!("{}{}", self.base, endpoints::analyze_path(project));
        let budget = Duration::from_millis(self.policy.timeout_ms);
        let send = async {
            let resp = self
                .http
                .post(&url)
                .send()
                .await
                .map_err(|e| ClientError::Network(e.to_string()))?;
            let resp = check_status(resp)?;
            resp.json::<AnalyzeResponse>()
                .await
                .map_err(|e| ClientError::Parse(e.to_string()))
        };
        let ack = tokio::time::timeout(budget, send)
            .await
            .map_err(|_| ClientError::Timeout {
                timeout_ms: self.policy.timeout_ms,
            })??;
        if ack.success {
            Ok(())
        } else {
            Err(ClientError::ServerRejection { reason: ack.reason })
        }
    }
}
