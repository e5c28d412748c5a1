//! Fetch, retry, and polling policy configuration.

use serde::{Deserialize, Serialize};

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_retry_limit() -> u32 {
    2
}

const fn default_backoff_ms() -> u64 {
    1_000
}

const fn default_context_retry_limit() -> u32 {
    3
}

const fn default_context_retry_delay_ms() -> u64 {
    300
}

const fn default_poll_max_iterations() -> u32 {
    30
}

const fn default_poll_interval_ms() -> u64 {
    2_000
}

/// Policy knobs for the resilient fetcher, the context validator, and the
/// analysis-completion poller. Every loop these values drive is bounded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Wall-time ceiling per request. A timed-out request fails fast and is
    /// not retried, so this is also the total budget.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Additional attempts after the first failure (non-timeout failures
    /// only).
    #[serde(default = "default_retry_limit")]
    pub retry_limit: u32,

    /// Linear backoff unit: attempt `k` sleeps `backoff_ms * k` before
    /// retrying.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,

    /// Maximum fetch attempts when the backend returns a payload for the
    /// wrong project.
    #[serde(default = "default_context_retry_limit")]
    pub context_retry_limit: u32,

    /// Delay between context-mismatch re-fetches.
    #[serde(default = "default_context_retry_delay_ms")]
    pub context_retry_delay_ms: u64,

    /// Iteration ceiling for analysis-completion polling.
    #[serde(default = "default_poll_max_iterations")]
    pub poll_max_iterations: u32,

    /// Delay between analysis-completion polls.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            retry_limit: default_retry_limit(),
            backoff_ms: default_backoff_ms(),
            context_retry_limit: default_context_retry_limit(),
            context_retry_delay_ms: default_context_retry_delay_ms(),
            poll_max_iterations: default_poll_max_iterations(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_protocol() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout_ms, 30_000);
        assert_eq!(config.retry_limit, 2);
        assert_eq!(config.backoff_ms, 1_000);
        assert_eq!(config.context_retry_limit, 3);
        assert_eq!(config.context_retry_delay_ms, 300);
    }

    #[test]
    fn polling_is_bounded_by_default() {
        let config = FetchConfig::default();
        assert!(config.poll_max_iterations > 0);
    }
}
