//! Temporal hotspot ranking and filtering.
//!
//! The policy that turns raw change timing into a severity score and a
//! burst/drift classification lives in the backend; its shape is captured
//! here as the [`HotspotScorer`] contract so an in-process policy can be
//! plugged in without changing the engine. The engine itself only ranks
//! and filters hotspots it is handed.

use risk_core::signals::{HotspotClass, TemporalHotspot};

use crate::outcome::MetricOutcome;

/// Raw timing observations for one file, as the scoring contract receives
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotObservation {
    pub path: String,
    pub commit_count: u32,
    pub frequency_baseline: f64,
    pub shortest_interval_hr: f64,
    pub mean_interval_hr: f64,
}

/// Output of a hotspot scoring policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HotspotScore {
    pub severity: f64,
    pub classification: HotspotClass,
}

/// External severity/classification contract.
///
/// Implementations must be deterministic over their input; the engine
/// makes no assumption about the internal policy.
pub trait HotspotScorer {
    fn score(&self, observation: &HotspotObservation) -> HotspotScore;
}

/// Apply a scoring policy to raw observations, producing ranked hotspots.
pub fn score_observations<S: HotspotScorer>(
    scorer: &S,
    observations: &[HotspotObservation],
) -> Vec<TemporalHotspot> {
    let mut hotspots: Vec<TemporalHotspot> = observations
        .iter()
        .map(|obs| {
            let scored = scorer.score(obs);
            TemporalHotspot {
                path: obs.path.clone(),
                commit_count: obs.commit_count,
                frequency_baseline: obs.frequency_baseline,
                shortest_interval_hr: obs.shortest_interval_hr,
                mean_interval_hr: obs.mean_interval_hr,
                severity_score: scored.severity,
                classification: scored.classification,
            }
        })
        .collect();
    rank(&mut hotspots);
    hotspots
}

/// Sort hotspots by severity, descending. Stable: equal severities keep
/// input order.
pub fn rank(hotspots: &mut [TemporalHotspot]) {
    hotspots.sort_by(|a, b| b.severity_score.total_cmp(&a.severity_score));
}

/// Case-insensitive path-substring filter.
#[must_use]
pub fn filter_by_path<'a>(
    hotspots: &'a [TemporalHotspot],
    needle: &str,
) -> Vec<&'a TemporalHotspot> {
    let needle = needle.to_lowercase();
    hotspots
        .iter()
        .filter(|h| h.path.to_lowercase().contains(&needle))
        .collect()
}

/// How many times more often this file changed than the repository's
/// median file: `commit_count / median_frequency`.
///
/// Unavailable when the median is zero or not finite.
#[must_use]
pub fn baseline_multiplier(hotspot: &TemporalHotspot, median_frequency: f64) -> MetricOutcome<f64> {
    if median_frequency <= 0.0 || !median_frequency.is_finite() {
        return MetricOutcome::unavailable("repository baseline frequency is zero");
    }
    MetricOutcome::available(f64::from(hotspot.commit_count) / median_frequency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hotspot(path: &str, commit_count: u32, severity: f64) -> TemporalHotspot {
        TemporalHotspot {
            path: path.to_string(),
            commit_count,
            frequency_baseline: 2.0,
            shortest_interval_hr: 0.5,
            mean_interval_hr: 6.0,
            severity_score: severity,
            classification: HotspotClass::Burst,
        }
    }

    #[test]
    fn rank_sorts_descending_and_is_stable() {
        let mut hotspots = vec![
            hotspot("a.rs", 4, 40.0),
            hotspot("b.rs", 9, 90.0),
            hotspot("c.rs", 5, 40.0),
        ];
        rank(&mut hotspots);
        let paths: Vec<&str> = hotspots.iter().map(|h| h.path.as_str()).collect();
        assert_eq!(paths, vec!["b.rs", "a.rs", "c.rs"]);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let hotspots = vec![hotspot("src/Billing.rs", 4, 40.0), hotspot("src/auth.rs", 2, 20.0)];
        let filtered = filter_by_path(&hotspots, "billing");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].path, "src/Billing.rs");
    }

    #[test]
    fn baseline_multiplier_uses_median() {
        let h = hotspot("a.rs", 14, 70.0);
        let outcome = baseline_multiplier(&h, 2.0);
        assert_eq!(outcome.value(), Some(&7.0));
    }

    #[test]
    fn zero_median_is_unavailable() {
        let h = hotspot("a.rs", 14, 70.0);
        assert!(!baseline_multiplier(&h, 0.0).is_available());
        assert!(!baseline_multiplier(&h, f64::NAN).is_available());
    }

    struct FixedScorer;

    impl HotspotScorer for FixedScorer {
        fn score(&self, observation: &HotspotObservation) -> HotspotScore {
            HotspotScore {
                severity: f64::from(observation.commit_count) * 10.0,
                classification: if observation.mean_interval_hr < 4.0 {
                    HotspotClass::Burst
                } else {
                    HotspotClass::Drift
                },
            }
        }
    }

    #[test]
    fn score_observations_applies_policy_and_ranks() {
        let observations = vec![
            HotspotObservation {
                path: "slow.rs".to_string(),
                commit_count: 2,
                frequency_baseline: 1.0,
                shortest_interval_hr: 10.0,
                mean_interval_hr: 48.0,
            },
            HotspotObservation {
                path: "hot.rs".to_string(),
                commit_count: 9,
                frequency_baseline: 1.0,
                shortest_interval_hr: 0.2,
                mean_interval_hr: 1.0,
            },
        ];
        let hotspots = score_observations(&FixedScorer, &observations);
        assert_eq!(hotspots[0].path, "hot.rs");
        assert_eq!(hotspots[0].classification, HotspotClass::Burst);
        assert_eq!(hotspots[1].classification, HotspotClass::Drift);
        assert_eq!(hotspots[0].severity_score, 90.0);
    }
}
