//! Per-section view state machines.
//!
//! Each analysis section runs `idle → loading → {success, error}`. A
//! project switch forces every view back to `loading` regardless of its
//! current state, recording the new generation at transition time. A
//! terminal result is accepted only if the token it was issued under is
//! still the live one when it arrives.

use std::collections::HashMap;

use risk_client::endpoints::Section;
use risk_core::{FetchResult, Generation, SelectionToken};

// ---------------------------------------------------------------------------
// SectionView
// ---------------------------------------------------------------------------

/// Typed view state for one section's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView<T> {
    state: FetchResult<T>,
    generation: Generation,
}

impl<T> Default for SectionView<T> {
    fn default() -> Self {
        Self {
            state: FetchResult::Idle,
            generation: Generation::default(),
        }
    }
}

impl<T> SectionView<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &FetchResult<T> {
        &self.state
    }

    /// Generation recorded at the last transition.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// Force the view into `loading` for the given token's generation.
    /// Applies from any current state.
    pub fn begin_loading(&mut self, token: &SelectionToken) {
        self.state = FetchResult::Loading;
        self.generation = token.generation;
    }

    /// Offer a terminal result to the view.
    ///
    /// The result is accepted only if `originating` — the token snapshot
    /// taken when the request was issued — still equals `live`. A stale
    /// result is discarded and the current state is left untouched.
    /// Returns whether the result was accepted.
    pub fn accept(
        &mut self,
        originating: &SelectionToken,
        live: &SelectionToken,
        result: FetchResult<T>,
    ) -> bool {
        if !originating.is_current(live) {
            tracing::debug!(
                originating_generation = %originating.generation,
                live_generation = %live.generation,
                originating_project = %originating.project,
                "discarding stale response",
            );
            return false;
        }
        self.state = result;
        self.generation = live.generation;
        true
    }
}

// ---------------------------------------------------------------------------
// ViewRegistry
// ---------------------------------------------------------------------------

/// Readiness flag for one section, as gated by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStatus {
    /// False while a project switch is in flight.
    pub ready: bool,
    /// Generation recorded when the section was last invalidated.
    pub generation: Generation,
}

/// Coordinator-owned readiness flags for every analysis section.
#[derive(Debug, Clone)]
pub struct ViewRegistry {
    statuses: HashMap<Section, ViewStatus>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        let statuses = Section::ALL
            .into_iter()
            .map(|section| {
                (
                    section,
                    ViewStatus {
                        ready: true,
                        generation: Generation::default(),
                    },
                )
            })
            .collect();
        Self { statuses }
    }
}

impl ViewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark every section not-ready, recording the new generation. Called
    /// atomically with the generation bump on project switch.
    pub fn invalidate_all(&mut self, generation: Generation) {
        for status in self.statuses.values_mut() {
            status.ready = false;
            status.generation = generation;
        }
    }

    /// Re-enable every section (backend acknowledged the switch, or the
    /// switch failed and the UI must not deadlock).
    pub fn enable_all(&mut self) {
        for status in self.statuses.values_mut() {
            status.ready = true;
        }
    }

    #[must_use]
    pub fn status(&self, section: Section) -> ViewStatus {
        self.statuses.get(&section).copied().unwrap_or(ViewStatus {
            ready: true,
            generation: Generation::default(),
        })
    }

    #[must_use]
    pub fn all_ready(&self) -> bool {
        self.statuses.values().all(|s| s.ready)
    }
}
