//! # risk-client
//!
//! HTTP client for the Risksurface analysis backend.
//!
//! Implements the data-freshness protocol's transport half:
//! - resilient fetch with a wall-time ceiling, bounded retry, and linear
//!   backoff — every outcome resolves to an explicit
//!   [`risk_core::FetchResult`], never a thrown error
//! - project-context validation with a bounded re-fetch loop
//! - typed wire structs for the backend's JSON contract
//!
//! Section fetchers are independent per caller: one section's failure
//! never blocks or cancels another's.

pub mod endpoints;
pub mod wire;

mod context;
mod error;
mod fetch;
mod http;

pub use context::{ContextCheck, ProjectContextValidator, check_context};
pub use error::ClientError;

use risk_config::{FetchConfig, RiskConfig};

/// HTTP client bound to one analysis backend.
pub struct AnalysisClient {
    http: reqwest::Client,
    base: String,
    policy: FetchConfig,
}

impl AnalysisClient {
    /// Create a client from loaded configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &RiskConfig) -> Self {
        Self::with_policy(config.api.base(), config.fetch.clone())
    }

    /// Create a client with an explicit base URL and fetch policy.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_policy(base_url: &str, policy: FetchConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("risksurface/0.1")
                .build()
                .expect("reqwest client should build"),
            base: base_url.trim_end_matches('/').to_string(),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> &FetchConfig {
        &self.policy
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = AnalysisClient::with_policy("http://localhost:8080/", FetchConfig::default());
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
