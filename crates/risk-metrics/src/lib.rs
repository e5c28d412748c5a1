//! # risk-metrics
//!
//! Derived risk metrics and the metric validation layer for Risksurface.
//!
//! Everything in this crate is a pure, deterministic function over
//! validated inputs: same inputs, same outputs, no I/O, no hidden state.
//! Malformed or empty inputs never panic — scoring functions return a
//! [`MetricOutcome::Unavailable`] sentinel that the validation layer turns
//! into an explicit "unavailable" display, never a fabricated number.

pub mod fragility;
pub mod hotspots;
pub mod outcome;
pub mod trajectory;
pub mod validate;
pub mod velocity;
pub mod vulnerability;

pub use fragility::fragility_score;
pub use hotspots::{
    HotspotObservation, HotspotScore, HotspotScorer, baseline_multiplier, filter_by_path, rank,
    score_observations,
};
pub use outcome::MetricOutcome;
pub use trajectory::{TrajectoryPoint, fragility_trajectory};
pub use validate::{
    CardInputs, CardReadiness, ConsistencyReport, MetricValidation, UNAVAILABLE, ValidatedMetric,
    check_consistency, validate_outcome, validate_scalar, validate_series,
};
pub use velocity::{VelocityAcceleration, VelocityTrend, velocity_acceleration};
pub use vulnerability::{CascadeTarget, VulnerabilityInsight, vulnerability_insight};
