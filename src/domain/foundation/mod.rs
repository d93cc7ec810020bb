//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of both decision engines.

mod errors;
mod ids;
mod judgment;
mod ranking;
mod timestamp;

pub use errors::{AnalysisError, ErrorCode};
pub use ids::ProjectId;
pub use judgment::{Judgment, JudgmentInput, SCALE_MAX, SCALE_MIN};
pub use ranking::first_best;
pub use timestamp::Timestamp;
