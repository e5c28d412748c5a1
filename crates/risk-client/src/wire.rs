//! JSON wire types for the analysis backend contract.
//!
//! Field names follow the backend's camelCase convention. Optional
//! sub-payloads default to `None`/empty so a partial analysis still
//! deserializes; the validation layer decides what is displayable.

use risk_core::project::{AnalysisState, Project, ProjectId};
use risk_core::signals::{CommitDataPoint, DependencyLink, DependencyNode, TemporalHotspot};
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Project identity embedded in an analysis payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRef {
    pub full_name: String,
}

/// Response to `GET /api/projects/selected`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedProjectResponse {
    pub selected: bool,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub analysis: Option<AnalysisPayload>,
}

impl SelectedProjectResponse {
    /// The project identity this payload was computed for, if embedded.
    #[must_use]
    pub fn embedded_project(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.full_name.as_str())
    }
}

/// Analysis sub-payloads. Each section is optional; an absent section means
/// the backend has not produced that analysis, not that it is empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    #[serde(default)]
    pub deps: Option<DependencyAnalysis>,
    #[serde(default)]
    pub temporal: Option<TemporalAnalysis>,
    #[serde(default)]
    pub commit_series: Option<Vec<CommitDataPoint>>,
}

/// Dependency-graph analysis for the selected project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyAnalysis {
    pub available: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub nodes: Vec<DependencyNode>,
    #[serde(default)]
    pub links: Vec<DependencyLink>,
}

/// Temporal-hotspot analysis for the selected project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalAnalysis {
    pub available: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub median_frequency: f64,
    #[serde(default)]
    pub temporal_hotspots: Vec<TemporalHotspot>,
    #[serde(default)]
    pub window_days: u32,
}

/// One discovered repository from `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub full_name: String,
    pub analysis_state: AnalysisState,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl ProjectRecord {
    /// Convert to the domain type, validating the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if `full_name` is not `owner/name`.
    pub fn into_project(self) -> Result<Project, ClientError> {
        let id = ProjectId::parse(&self.full_name)
            .map_err(|e| ClientError::Parse(e.to_string()))?;
        Ok(Project {
            id,
            analysis_state: self.analysis_state,
            description: self.description,
            default_branch: self.default_branch,
            language: self.language,
        })
    }
}

/// Body for `POST /api/projects/selected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectProjectRequest {
    pub full_name: String,
}

/// Response to `POST /api/projects/{owner}/{repo}/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn selected_response_parses_full_payload() {
        let json = r#"{
            "selected": true,
            "project": {"fullName": "acme/widgets"},
            "analysis": {
                "deps": {
                    "available": true,
                    "nodes": [
                        {"id": "core", "fanIn": 3, "fanOut": 2,
                         "centralityScore": 0.4, "transitiveDepth": 1}
                    ],
                    "links": [
                        {"source": "core", "target": "auth", "weight": 2.0}
                    ]
                },
                "temporal": {
                    "available": false,
                    "reason": "insufficient commit history"
                }
            }
        }"#;
        let resp: SelectedProjectResponse = serde_json::from_str(json).unwrap();
        assert!(resp.selected);
        assert_eq!(resp.embedded_project(), Some("acme/widgets"));
        let analysis = resp.analysis.unwrap();
        let deps = analysis.deps.unwrap();
        assert_eq!(deps.nodes.len(), 1);
        assert_eq!(deps.links.len(), 1);
        let temporal = analysis.temporal.unwrap();
        assert!(!temporal.available);
        assert_eq!(temporal.reason.as_deref(), Some("insufficient commit history"));
    }

    #[test]
    fn selected_response_without_project_has_no_identity() {
        let resp: SelectedProjectResponse =
            serde_json::from_str(r#"{"selected": false}"#).unwrap();
        assert_eq!(resp.embedded_project(), None);
        assert!(resp.analysis.is_none());
    }

    #[test]
    fn project_record_converts_to_domain_project() {
        let json = r#"{
            "fullName": "acme/widgets",
            "analysisState": "ready",
            "language": "rust"
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        let project = record.into_project().unwrap();
        assert_eq!(project.id.full_name(), "acme/widgets");
        assert_eq!(project.analysis_state, AnalysisState::Ready);
        assert_eq!(project.language.as_deref(), Some("rust"));
    }

    #[test]
    fn bad_full_name_is_a_parse_error() {
        let record = ProjectRecord {
            full_name: "not-a-project".to_string(),
            analysis_state: AnalysisState::Unanalyzed,
            description: None,
            default_branch: None,
            language: None,
        };
        assert!(record.into_project().is_err());
    }

    #[test]
    fn select_request_serializes_camel_case() {
        let body = SelectProjectRequest {
            full_name: "acme/widgets".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"fullName":"acme/widgets"}"#);
    }
}
