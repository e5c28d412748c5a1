//! The project selection coordinator.
//!
//! Sole owner of the selection token. A switch bumps the generation,
//! invalidates every view, records the selection, then notifies the
//! backend so subsequent selected-project queries resolve consistently.
//! The notification is best-effort: on failure the views are re-enabled
//! anyway (the UI must not deadlock) and a warning is logged.

use risk_client::AnalysisClient;
use risk_core::{Generation, ProjectId, SelectionToken};

use crate::views::ViewRegistry;

/// Result of a `select` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOutcome {
    /// The live token after the call.
    pub token: SelectionToken,
    /// False when re-selecting the already-selected project (the token
    /// was not bumped and in-flight work was not invalidated).
    pub changed: bool,
    /// Whether the backend acknowledged the selection.
    pub backend_synced: bool,
}

/// Owns the "currently selected project" state and its version token.
pub struct ProjectSelectionCoordinator {
    client: AnalysisClient,
    generation: Generation,
    selected: Option<ProjectId>,
    views: ViewRegistry,
}

impl ProjectSelectionCoordinator {
    #[must_use]
    pub fn new(client: AnalysisClient) -> Self {
        Self {
            client,
            generation: Generation::default(),
            selected: None,
            views: ViewRegistry::new(),
        }
    }

    /// The live token, if a project is selected. Components clone this
    /// snapshot into each request and compare it again on arrival.
    #[must_use]
    pub fn current_token(&self) -> Option<SelectionToken> {
        self.selected
            .clone()
            .map(|project| SelectionToken::new(self.generation, project))
    }

    #[must_use]
    pub const fn views(&self) -> &ViewRegistry {
        &self.views
    }

    #[must_use]
    pub const fn client(&self) -> &AnalysisClient {
        &self.client
    }

    /// Switch the selected project.
    ///
    /// Bumps the generation, marks all views not-ready, and records the
    /// selection before any await point; then notifies the backend and
    /// re-enables views whether or not the backend acknowledged.
    /// Re-selecting the already-selected project is a no-op for the token,
    /// so unrelated in-flight work is not spuriously invalidated.
    pub async fn select(&mut self, project: ProjectId) -> SelectOutcome {
        if self.selected.as_ref() == Some(&project) {
            return SelectOutcome {
                token: SelectionToken::new(self.generation, project),
                changed: false,
                backend_synced: true,
            };
        }

        self.generation = self.generation.next();
        self.views.invalidate_all(self.generation);
        self.selected = Some(project.clone());
        let token = SelectionToken::new(self.generation, project.clone());
        tracing::info!(project = %project, generation = %self.generation, "project selected");

        let backend_synced = match self.client.post_selected(&project).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    project = %project,
                    %err,
                    "backend selection sync failed; re-enabling views anyway",
                );
                false
            }
        };
        self.views.enable_all();

        SelectOutcome {
            token,
            changed: true,
            backend_synced,
        }
    }
}
