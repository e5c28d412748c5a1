//! # risk-config
//!
//! Layered configuration loading for Risksurface using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RISKSURFACE_*` prefix, `__` as separator)
//! 2. Project-level `.risksurface/config.toml`
//! 3. User-level `~/.config/risksurface/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RISKSURFACE_API__BASE_URL` -> `api.base_url`,
//! `RISKSURFACE_FETCH__TIMEOUT_MS` -> `fetch.timeout_ms`, etc. The `__`
//! (double underscore) separates nested config sections.

mod api;
mod error;
mod fetch;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use fetch::FetchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RiskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl RiskConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. This is the typical
    /// entry point for the CLI and tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".risksurface/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("RISKSURFACE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("risksurface").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_loads() {
        let config = RiskConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.fetch.retry_limit, 2);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: RiskConfig = RiskConfig::figment().extract().expect("defaults");
            assert_eq!(config.fetch.timeout_ms, 30_000);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("RISKSURFACE_API__BASE_URL", "https://risk.internal:9000");
            jail.set_env("RISKSURFACE_FETCH__RETRY_LIMIT", "5");
            let config: RiskConfig = RiskConfig::figment().extract().expect("env config");
            assert_eq!(config.api.base_url, "https://risk.internal:9000");
            assert_eq!(config.fetch.retry_limit, 5);
            Ok(())
        });
    }

    #[test]
    fn project_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".risksurface")?;
            jail.create_file(
                ".risksurface/config.toml",
                r#"
                [fetch]
                backoff_ms = 250
                timeout_ms = 5000
                "#,
            )?;
            jail.set_env("RISKSURFACE_FETCH__TIMEOUT_MS", "10000");
            let config: RiskConfig = RiskConfig::figment().extract().expect("layered config");
            assert_eq!(config.fetch.backoff_ms, 250);
            assert_eq!(config.fetch.timeout_ms, 10_000);
            Ok(())
        });
    }
}
