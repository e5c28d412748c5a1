//! Metric validation layer.
//!
//! Decides, per value, whether a computed or fetched metric is trustworthy
//! enough to display. A value that fails validation renders as the literal
//! `unavailable` — never a zero, dash, or placeholder that resembles a
//! real measurement. All functions here are pure and idempotent.

use risk_core::Provenance;
use serde::Serialize;

use crate::outcome::MetricOutcome;

/// Rendered form of an invalid metric.
pub const UNAVAILABLE: &str = "unavailable";

/// Verdict on a single metric value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricValidation {
    pub is_valid: bool,
    pub source: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// A value paired with its validation verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedMetric<T> {
    /// Present only when validation passed.
    pub value: Option<T>,
    pub validation: MetricValidation,
}

impl<T> ValidatedMetric<T> {
    fn valid(value: T, source: Provenance) -> Self {
        Self {
            value: Some(value),
            validation: MetricValidation {
                is_valid: true,
                source,
                reason: None,
            },
        }
    }

    fn invalid(source: Provenance, reason: impl Into<String>) -> Self {
        Self {
            value: None,
            validation: MetricValidation {
                is_valid: false,
                source,
                reason: Some(reason.into()),
            },
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.validation.is_valid
    }
}

impl<T: std::fmt::Display> ValidatedMetric<T> {
    /// Render the value, or the literal `unavailable` when invalid.
    #[must_use]
    pub fn render(&self) -> String {
        self.value
            .as_ref()
            .map_or_else(|| UNAVAILABLE.to_string(), ToString::to_string)
    }
}

/// Validate a scalar metric.
///
/// Missing values are invalid with reason "missing"; values below
/// `min_threshold` are invalid with a reason naming both numbers;
/// non-finite values never pass.
#[must_use]
pub fn validate_scalar(
    value: Option<f64>,
    source: Provenance,
    min_threshold: Option<f64>,
) -> ValidatedMetric<f64> {
    let Some(v) = value else {
        return ValidatedMetric::invalid(Provenance::Unknown, "value is missing");
    };
    if !v.is_finite() {
        return ValidatedMetric::invalid(source, "value is not a finite number");
    }
    if let Some(threshold) = min_threshold {
        if v < threshold {
            return ValidatedMetric::invalid(
                source,
                format!("value {v} below minimum threshold {threshold}"),
            );
        }
    }
    ValidatedMetric::valid(v, source)
}

/// Validate a series metric: an empty collection is insufficient data.
#[must_use]
pub fn validate_series<'a, T>(values: &'a [T], source: Provenance) -> ValidatedMetric<&'a [T]> {
    if values.is_empty() {
        ValidatedMetric::invalid(source, "empty series - insufficient data")
    } else {
        ValidatedMetric::valid(values, source)
    }
}

/// Lift an engine outcome into the validation layer, preserving the
/// stated reason when the metric is unavailable.
#[must_use]
pub fn validate_outcome<T>(outcome: MetricOutcome<T>, source: Provenance) -> ValidatedMetric<T> {
    match outcome {
        MetricOutcome::Available { value } => ValidatedMetric::valid(value, source),
        MetricOutcome::Unavailable { reason } => ValidatedMetric::invalid(source, reason),
    }
}

// ---------------------------------------------------------------------------
// Composite views
// ---------------------------------------------------------------------------

/// Readiness report for a composite card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardReadiness {
    pub is_ready: bool,
    /// Names of absent inputs, so the display can explain exactly what is
    /// missing. Empty inputs are suffixed `(empty)`.
    pub missing_inputs: Vec<String>,
}

/// Aggregates named inputs for a composite view.
#[derive(Debug, Default)]
pub struct CardInputs {
    missing: Vec<String>,
}

impl CardInputs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a named scalar input.
    #[must_use]
    pub fn scalar(mut self, name: &str, value: Option<f64>) -> Self {
        if value.is_none() {
            self.missing.push(name.to_string());
        }
        self
    }

    /// Record a named collection input.
    #[must_use]
    pub fn series<T>(mut self, name: &str, values: Option<&[T]>) -> Self {
        match values {
            None => self.missing.push(name.to_string()),
            Some([]) => self.missing.push(format!("{name} (empty)")),
            Some(_) => {}
        }
        self
    }

    #[must_use]
    pub fn finish(self) -> CardReadiness {
        CardReadiness {
            is_ready: self.missing.is_empty(),
            missing_inputs: self.missing,
        }
    }
}

// ---------------------------------------------------------------------------
// Consistency audit
// ---------------------------------------------------------------------------

/// Result of a cross-metric consistency audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    pub is_consistent: bool,
    pub failures: Vec<String>,
}

/// Evaluate labelled invariants between related metrics and report the
/// labels of those that do not hold.
pub fn check_consistency<I>(checks: I) -> ConsistencyReport
where
    I: IntoIterator<Item = (String, bool)>,
{
    let failures: Vec<String> = checks
        .into_iter()
        .filter_map(|(label, holds)| (!holds).then_some(label))
        .collect();
    ConsistencyReport {
        is_consistent: failures.is_empty(),
        failures,
    }
}
