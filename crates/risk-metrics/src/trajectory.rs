//! Fragility trajectory over a commit time series.
//!
//! When the backend supplies per-bucket fragility, those values pass
//! through unchanged. Otherwise each point gets an explicit **proxy**
//! estimate built from commit velocity and position in the series. The
//! proxy is not measured fragility; points carry a flag so callers can
//! label it as an estimate.

use chrono::{DateTime, Utc};
use risk_core::Provenance;
use risk_core::signals::CommitDataPoint;
use serde::Serialize;

use crate::outcome::MetricOutcome;

const VELOCITY_SPAN: f64 = 50.0;
const TIME_SPAN: f64 = 30.0;
const BASE: f64 = 20.0;

/// One point of the fragility trajectory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub date: DateTime<Utc>,
    pub fragility: f64,
    /// True when the value is the proxy model, not backend-measured.
    pub proxy: bool,
    pub source: Provenance,
}

/// Proxy fragility for point `i` of `n`:
///
/// ```text
/// velocity_factor = commits / max_commits * 50   (0 if max_commits == 0)
/// time_factor     = i / n * 30
/// fragility       = round(velocity_factor + time_factor + 20)
/// ```
fn proxy_fragility(commits: u32, max_commits: u32, index: usize, len: usize) -> f64 {
    let velocity_factor = if max_commits == 0 {
        0.0
    } else {
        f64::from(commits) / f64::from(max_commits) * VELOCITY_SPAN
    };
    let time_factor = index as f64 / len as f64 * TIME_SPAN;
    (velocity_factor + time_factor + BASE).round()
}

/// Build the fragility trajectory for an ordered commit series.
///
/// Unavailable for an empty series. Backend-supplied fragility wins per
/// point; the proxy model fills the gaps.
#[must_use]
pub fn fragility_trajectory(series: &[CommitDataPoint]) -> MetricOutcome<Vec<TrajectoryPoint>> {
    if series.is_empty() {
        return MetricOutcome::unavailable("empty commit series");
    }

    let max_commits = series.iter().map(|p| p.commit_count).max().unwrap_or(0);
    let len = series.len();

    let points = series
        .iter()
        .enumerate()
        .map(|(i, point)| match point.fragility {
            Some(measured) => TrajectoryPoint {
                date: point.date,
                fragility: measured,
                proxy: false,
                source: Provenance::CommitHistory,
            },
            None => TrajectoryPoint {
                date: point.date,
                fragility: proxy_fragility(point.commit_count, max_commits, i, len),
                proxy: true,
                source: Provenance::CommitHistory,
            },
        })
        .collect();

    MetricOutcome::available(points)
}
