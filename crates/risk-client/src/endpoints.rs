//! Analysis backend endpoints.

use std::fmt;
use std::str::FromStr;

use risk_core::ProjectId;

/// `GET`/`POST` endpoint for the selected-project query.
pub const SELECTED: &str = "/api/projects/selected";

/// `GET` endpoint listing discovered repositories.
pub const PROJECTS: &str = "/api/projects";

/// `POST` endpoint requesting analysis of one repository.
#[must_use]
pub fn analyze_path(project: &ProjectId) -> String {
    format!("/api/projects/{}/{}/analyze", project.owner(), project.name())
}

/// Section-scoped analysis views, each with its own endpoint and its own
/// independent fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Topology,
    Trajectory,
    Impact,
    Dependencies,
    Concentration,
    Temporal,
    Predictions,
}

impl Section {
    pub const ALL: [Self; 7] = [
        Self::Topology,
        Self::Trajectory,
        Self::Impact,
        Self::Dependencies,
        Self::Concentration,
        Self::Temporal,
        Self::Predictions,
    ];

    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Topology => "/api/topology",
            Self::Trajectory => "/api/trajectory",
            Self::Impact => "/api/impact",
            Self::Dependencies => "/api/dependencies",
            Self::Concentration => "/api/concentration",
            Self::Temporal => "/api/temporal",
            Self::Predictions => "/api/predictions",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Topology => "topology",
            Self::Trajectory => "trajectory",
            Self::Impact => "impact",
            Self::Dependencies => "dependencies",
            Self::Concentration => "concentration",
            Self::Temporal => "temporal",
            Self::Predictions => "predictions",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| format!("unknown section '{s}'"))
    }
}

/// Append URL-encoded query parameters to an endpoint path.
#[must_use]
pub fn with_params(endpoint: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();
    format!("{endpoint}?{}", query.join("&"))
}
