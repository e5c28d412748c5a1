//! # risk-core
//!
//! Core types and error types for Risksurface.
//!
//! This crate provides the foundational types shared across all
//! Risksurface crates:
//! - Project identity and analysis lifecycle state
//! - The selection token used to discard stale asynchronous results
//! - Raw signal records received from the analysis backend
//!   (dependency graph, commit time series, temporal hotspots)
//! - The explicit fetch-result envelope (never-throwing fetch contract)
//! - Provenance tags recording which raw signal a metric derives from
//! - Cross-cutting error types

pub mod errors;
pub mod fetch;
pub mod project;
pub mod provenance;
pub mod signals;
pub mod token;

pub use errors::CoreError;
pub use fetch::{FetchResult, FetchState};
pub use project::{AnalysisState, Project, ProjectId};
pub use provenance::Provenance;
pub use token::{Generation, SelectionToken};
