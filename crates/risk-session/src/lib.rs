//! # risk-session
//!
//! Project selection coordination and view freshness for Risksurface.
//!
//! The coordinator is the sole owner of the selection token (generation +
//! selected project). Every asynchronous task takes an immutable snapshot
//! of the token at creation time; when its response arrives, the snapshot
//! is compared against the live token before any state mutation. Stale
//! responses are discarded, never merged — there is no mid-flight
//! cancellation, and none is needed.

pub mod coordinator;
pub mod poll;
pub mod views;

pub use coordinator::{ProjectSelectionCoordinator, SelectOutcome};
pub use poll::{PollOutcome, poll_until_ready};
pub use views::{SectionView, ViewRegistry, ViewStatus};
