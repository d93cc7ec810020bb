//! Domain layer containing the decision engines and their types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (judgments, IDs, timestamps, errors)
//! - `ahp` - Pairwise-comparison matrices, AHP projects and reports
//! - `voting` - Competency table, experts and budgeted voting projects
//! - `project` - Persisted project documents wrapping either engine

pub mod ahp;
pub mod foundation;
pub mod project;
pub mod voting;
