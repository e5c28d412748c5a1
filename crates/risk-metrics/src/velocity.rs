//! Commit velocity acceleration.
//!
//! Compares the mean commit rate of the most recent window against the
//! window immediately preceding it. The ratio of the two is a leading
//! indicator: a repository can look calm in absolute counts while its rate
//! of change is climbing.

use risk_core::signals::CommitDataPoint;
use serde::Serialize;

use crate::outcome::MetricOutcome;

const MIN_SERIES_LEN: usize = 3;
const MIN_WINDOW: usize = 2;

/// Direction of the commit-rate trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VelocityTrend {
    Accelerating,
    Decelerating,
    Stable,
}

/// Ratio of recent to prior commit-rate windows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityAcceleration {
    pub current_velocity: f64,
    pub previous_velocity: f64,
    /// `current_velocity / previous_velocity`.
    pub acceleration: f64,
    pub trend: VelocityTrend,
    pub window_size: usize,
}

fn mean(points: &[CommitDataPoint]) -> f64 {
    let sum: u64 = points.iter().map(|p| u64::from(p.commit_count)).sum();
    sum as f64 / points.len() as f64
}

/// Compute velocity acceleration over an ordered commit-count series.
///
/// Requires at least three points; the window size is `max(2, n / 3)`.
/// Unavailable when the series is too short, the preceding window is empty,
/// or the preceding window's mean is zero (the ratio would be undefined).
#[must_use]
pub fn velocity_acceleration(series: &[CommitDataPoint]) -> MetricOutcome<VelocityAcceleration> {
    let n = series.len();
    if n < MIN_SERIES_LEN {
        return MetricOutcome::unavailable(format!(
            "commit series has {n} points; at least {MIN_SERIES_LEN} required"
        ));
    }

    let window = MIN_WINDOW.max(n / 3);
    let current = &series[n - window..];
    let previous = &series[n.saturating_sub(2 * window)..n - window];
    if previous.is_empty() {
        return MetricOutcome::unavailable("no preceding window to compare against");
    }

    let current_velocity = mean(current);
    let previous_velocity = mean(previous);
    if previous_velocity == 0.0 {
        return MetricOutcome::unavailable("preceding window has zero commits; ratio undefined");
    }

    let acceleration = current_velocity / previous_velocity;
    let trend = if acceleration > 1.0 {
        VelocityTrend::Accelerating
    } else if acceleration < 1.0 {
        VelocityTrend::Decelerating
    } else {
        VelocityTrend::Stable
    };

    MetricOutcome::available(VelocityAcceleration {
        current_velocity,
        previous_velocity,
        acceleration,
        trend,
        window_size: window,
    })
}
