//! Project identity and analysis lifecycle.
//!
//! A project is created on discovery, mutated by analysis completion, and
//! never deleted within a session. `AnalysisState` provides
//! `allowed_next_states()` to enforce valid transitions at the application
//! layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ProjectId
// ---------------------------------------------------------------------------

/// Project identifier of the form `owner/name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectId {
    owner: String,
    name: String,
}

impl ProjectId {
    /// Parse an `owner/name` string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProjectId`] if the string does not contain
    /// exactly one `/` separating two non-empty segments.
    pub fn parse(full_name: &str) -> Result<Self, CoreError> {
        match full_name.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(CoreError::InvalidProjectId(full_name.to_string())),
        }
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The canonical `owner/name` form used on the wire.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl TryFrom<String> for ProjectId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProjectId> for String {
    fn from(id: ProjectId) -> Self {
        id.full_name()
    }
}

// ---------------------------------------------------------------------------
// AnalysisState
// ---------------------------------------------------------------------------

/// Analysis lifecycle of a discovered project.
///
/// ```text
/// unanalyzed → analyzing → ready
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisState {
    Unanalyzed,
    Analyzing,
    Ready,
}

impl AnalysisState {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unanalyzed => &[Self::Analyzing],
            Self::Analyzing => &[Self::Ready],
            Self::Ready => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unanalyzed => "unanalyzed",
            Self::Analyzing => "analyzing",
            Self::Ready => "ready",
        }
    }
}

impl fmt::Display for AnalysisState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// A discovered repository and its analysis lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub analysis_state: AnalysisState,
    /// Repository description from discovery, if any.
    #[serde(default)]
    pub description: Option<String>,
    /// Default branch name from discovery, if any.
    #[serde(default)]
    pub default_branch: Option<String>,
    /// Primary language from discovery, if any.
    #[serde(default)]
    pub language: Option<String>,
}

impl Project {
    /// Create a freshly discovered, unanalyzed project.
    #[must_use]
    pub const fn discovered(id: ProjectId) -> Self {
        Self {
            id,
            analysis_state: AnalysisState::Unanalyzed,
            description: None,
            default_branch: None,
            language: None,
        }
    }

    /// Advance the analysis lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] if the transition is not in
    /// the allowed table.
    pub fn transition_to(&mut self, next: AnalysisState) -> Result<(), CoreError> {
        if !self.analysis_state.can_transition_to(next) {
            return Err(CoreError::InvalidTransition {
                project: self.id.full_name(),
                from: self.analysis_state.to_string(),
                to: next.to_string(),
            });
        }
        self.analysis_state = next;
        Ok(())
    }
}
