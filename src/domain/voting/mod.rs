//! Voting Module - Competency-weighted budgeted expert voting.
//!
//! # Components
//!
//! - `competency` - Position and degree lookup table
//! - `VoteBudget` - Points an expert may still spend in the current round
//! - `Expert` - Named voter with a frozen competency index
//! - `ExpertProject` - Vote ledger and weighted aggregation
//! - `ExpertReport` - Scores, best alternative and per-expert standing

mod budget;
mod competency;
mod expert;
mod project;
mod report;

pub use budget::{VoteBudget, ROUND_POINTS};
pub use competency::{competency_score, Degree, Position, COMPETENCY_SCALE};
pub use expert::{Expert, ExpertRecord};
pub use project::{ExpertProject, ExpertProjectSnapshot, VoteRecord};
pub use report::{ExpertReport, ExpertStanding};
