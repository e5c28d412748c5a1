//! Analysis backend endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the analysis backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Base URL without a trailing slash, ready for endpoint concatenation.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:8080");
    }

    #[test]
    fn base_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://risk.example.com/".to_string(),
        };
        assert_eq!(config.base(), "https://risk.example.com");
    }
}
