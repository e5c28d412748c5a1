//! Explicit fetch-result envelope.
//!
//! The fetch layer never throws: every outcome resolves to a
//! [`FetchResult`]. Terminal variants carry their payload or message by
//! construction, so "exactly one of data/error is set" holds structurally
//! rather than by convention.

use chrono::{DateTime, Utc};

/// Lifecycle state of a fetch, for callers that only need the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchState {
    Idle,
    Loading,
    Success,
    Error,
}

impl FetchState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

/// Outcome of a single logical request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult<T> {
    Idle,
    Loading,
    Success { data: T, timestamp: DateTime<Utc> },
    Error { error: String, timestamp: DateTime<Utc> },
}

impl<T> FetchResult<T> {
    /// A successful terminal result stamped with the current time.
    #[must_use]
    pub fn success(data: T) -> Self {
        Self::Success {
            data,
            timestamp: Utc::now(),
        }
    }

    /// A failed terminal result stamped with the current time.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Error {
            error: error.into(),
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> FetchState {
        match self {
            Self::Idle => FetchState::Idle,
            Self::Loading => FetchState::Loading,
            Self::Success { .. } => FetchState::Success,
            Self::Error { .. } => FetchState::Error,
        }
    }

    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data, .. } => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Success { timestamp, .. } | Self::Error { timestamp, .. } => Some(*timestamp),
            _ => None,
        }
    }

    /// Collapse into a `Result`, dropping timestamps. Non-terminal states
    /// become an error, since the caller asked for a finished outcome.
    ///
    /// # Errors
    ///
    /// Returns the error message for `Error`, or a generic message for
    /// `Idle`/`Loading`.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data, .. } => Ok(data),
            Self::Error { error, .. } => Err(error),
            Self::Idle | Self::Loading => Err("request has not completed".to_string()),
        }
    }

    /// Map the success payload, preserving state and timestamp.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        match self {
            Self::Idle => FetchResult::Idle,
            Self::Loading => FetchResult::Loading,
            Self::Success { data, timestamp } => FetchResult::Success {
                data: f(data),
                timestamp,
            },
            Self::Error { error, timestamp } => FetchResult::Error { error, timestamp },
        }
    }
}
