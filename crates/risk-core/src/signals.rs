//! Raw signal records received from the analysis backend.
//!
//! These are derived, read-only once received: the backend mines the
//! dependency graph and commit history; this client only scores and ranks
//! what it is handed. Field names follow the backend's camelCase JSON
//! contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Dependency graph
// ---------------------------------------------------------------------------

/// A node in the analyzed dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyNode {
    pub id: String,
    pub fan_in: u32,
    pub fan_out: u32,
    /// Normalized centrality in `[0, 1]`.
    pub centrality_score: f64,
    pub transitive_depth: u32,
}

/// Risk category attached to a dependency link by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Structural,
    Version,
    Cyclic,
    Unknown,
}

/// A directed edge in the analyzed dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyLink {
    pub source: String,
    pub target: String,
    #[serde(default = "RiskCategory::unknown")]
    pub category: RiskCategory,
    pub weight: f64,
}

impl RiskCategory {
    const fn unknown() -> Self {
        Self::Unknown
    }
}

// ---------------------------------------------------------------------------
// Commit time series
// ---------------------------------------------------------------------------

/// One bucket of the commit-count time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitDataPoint {
    /// Start of the date bucket.
    pub date: DateTime<Utc>,
    pub commit_count: u32,
    /// Backend-computed fragility for this bucket, when the analysis
    /// produced one. Absent for repositories the backend scored
    /// structurally only.
    #[serde(default)]
    pub fragility: Option<f64>,
}

// ---------------------------------------------------------------------------
// Temporal hotspots
// ---------------------------------------------------------------------------

/// Classification of a file's change pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotspotClass {
    /// High-frequency changes compressed in a short span.
    Burst,
    /// Repeated, sustained low-frequency changes.
    Drift,
}

/// A file the backend flagged as temporally unstable.
///
/// `severity_score` and `classification` are computed by the backend's
/// scoring policy; this client consumes them as given and only ranks and
/// filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalHotspot {
    pub path: String,
    pub commit_count: u32,
    pub frequency_baseline: f64,
    pub shortest_interval_hr: f64,
    pub mean_interval_hr: f64,
    pub severity_score: f64,
    pub classification: HotspotClass,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dependency_node_parses_camel_case() {
        let json = r#"{
            "id": "core/auth",
            "fanIn": 3,
            "fanOut": 2,
            "centralityScore": 0.4,
            "transitiveDepth": 1
        }"#;
        let node: DependencyNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.id, "core/auth");
        assert_eq!(node.fan_in, 3);
        assert_eq!(node.fan_out, 2);
        assert!((node.centrality_score - 0.4).abs() < f64::EPSILON);
        assert_eq!(node.transitive_depth, 1);
    }

    #[test]
    fn link_category_defaults_to_unknown() {
        let json = r#"{"source": "a", "target": "b", "weight": 2.5}"#;
        let link: DependencyLink = serde_json::from_str(json).unwrap();
        assert_eq!(link.category, RiskCategory::Unknown);
    }

    #[test]
    fn hotspot_classification_parses_snake_case() {
        let json = r#"{
            "path": "src/billing.rs",
            "commitCount": 14,
            "frequencyBaseline": 2.0,
            "shortestIntervalHr": 0.5,
            "meanIntervalHr": 9.3,
            "severityScore": 71.0,
            "classification": "burst"
        }"#;
        let hotspot: TemporalHotspot = serde_json::from_str(json).unwrap();
        assert_eq!(hotspot.classification, HotspotClass::Burst);
        assert_eq!(hotspot.commit_count, 14);
    }

    #[test]
    fn commit_point_fragility_is_optional() {
        let json = r#"{"date": "2026-01-01T00:00:00Z", "commitCount": 7}"#;
        let point: CommitDataPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.commit_count, 7);
        assert!(point.fragility.is_none());
    }
}
