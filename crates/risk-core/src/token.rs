//! Selection tokens for discarding stale asynchronous results.
//!
//! The coordinator owns a monotonically increasing [`Generation`] plus the
//! selected project identity. Every asynchronous task records a snapshot of
//! the token at creation time and compares it against the live token at
//! completion time, before any state mutation. All other components treat
//! the token as read-only.

use serde::{Deserialize, Serialize};

use crate::project::ProjectId;

/// Monotonically increasing version stamp. Bumped on every effective project
/// switch; never reused within a session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Generation(u64);

impl Generation {
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// The next generation in sequence.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable snapshot of the current selection: generation plus project.
///
/// Cloned into every in-flight request; compared against the coordinator's
/// live token when the response arrives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionToken {
    pub generation: Generation,
    pub project: ProjectId,
}

impl SelectionToken {
    #[must_use]
    pub const fn new(generation: Generation, project: ProjectId) -> Self {
        Self {
            generation,
            project,
        }
    }

    /// Whether a response tagged with this token is still current.
    #[must_use]
    pub fn is_current(&self, live: &Self) -> bool {
        self.generation == live.generation && self.project == live.project
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project(s: &str) -> ProjectId {
        ProjectId::parse(s).unwrap()
    }

    #[test]
    fn generation_is_monotonic() {
        let g = Generation::default();
        assert_eq!(g.value(), 0);
        assert_eq!(g.next().value(), 1);
        assert!(g < g.next());
    }

    #[test]
    fn token_current_requires_same_generation_and_project() {
        let a = SelectionToken::new(Generation::default().next(), project("acme/widgets"));
        let same = a.clone();
        assert!(a.is_current(&same));

        let later = SelectionToken::new(a.generation.next(), project("acme/widgets"));
        assert!(!a.is_current(&later));

        let other = SelectionToken::new(a.generation, project("acme/gears"));
        assert!(!a.is_current(&other));
    }
}
