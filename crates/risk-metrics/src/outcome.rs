//! Sentinel for metrics that cannot be computed.
//!
//! Insufficient data is not an error: it is never retried and it must
//! render as an explicit "unavailable" indicator, distinct from loading and
//! error states. Scoring functions therefore return [`MetricOutcome`]
//! instead of `Result`.

use serde::Serialize;

/// Result of a scoring function: a value, or a stated reason it cannot
/// be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum MetricOutcome<T> {
    Available { value: T },
    Unavailable { reason: String },
}

impl<T> MetricOutcome<T> {
    #[must_use]
    pub const fn available(value: T) -> Self {
        Self::Available { value }
    }

    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Available { value } => Some(value),
            Self::Unavailable { .. } => None,
        }
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Available { .. } => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MetricOutcome<U> {
        match self {
            Self::Available { value } => MetricOutcome::Available { value: f(value) },
            Self::Unavailable { reason } => MetricOutcome::Unavailable { reason },
        }
    }
}
