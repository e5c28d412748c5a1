//! Cross-cutting error types for Risksurface.
//!
//! Domain-specific errors (e.g., `ClientError`, `ConfigError`) are defined in
//! their respective crates. Every error is scoped to the smallest unit that
//! observed it — one metric, one section, one fetch — so a single section's
//! failure never cascades into another section's display.

use thiserror::Error;

/// Errors that can be raised by any Risksurface crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A project identifier was not of the form `owner/name`.
    #[error("invalid project id '{0}': expected owner/name")]
    InvalidProjectId(String),

    /// An analysis-state transition was attempted that is not allowed.
    #[error("invalid state transition for {project}: {from} to {to}")]
    InvalidTransition {
        project: String,
        from: String,
        to: String,
    },

    /// Data failed validation (shape, range, constraints).
    #[error("validation error: {0}")]
    Validation(String),
}
