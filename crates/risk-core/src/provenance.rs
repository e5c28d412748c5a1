//! Provenance tags for computed metrics.
//!
//! Every displayed value carries the raw signal category it was derived
//! from. Consumers check these tags structurally instead of scanning
//! rendered text for known placeholder strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw signal category a metric was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    GithubApi,
    CommitHistory,
    DependencyManifest,
    GraphDerived,
    Unknown,
}

impl Provenance {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GithubApi => "github_api",
            Self::CommitHistory => "commit_history",
            Self::DependencyManifest => "dependency_manifest",
            Self::GraphDerived => "graph_derived",
            Self::Unknown => "unknown",
        }
    }

    /// Whether this tag names a verifiable computational origin.
    #[must_use]
    pub const fn is_verifiable(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
