//! Project command and query handlers.

mod errors;
mod evaluate_project;
mod open_project;
mod record_vote;
mod save_project;
mod set_judgment;

pub use errors::ProjectError;
pub use evaluate_project::{EvaluateProjectHandler, EvaluateProjectQuery, Evaluation};
pub use open_project::{OpenProjectHandler, OpenProjectQuery};
pub use record_vote::{RecordVoteCommand, RecordVoteHandler, RecordVoteResult};
pub use save_project::{SaveProjectCommand, SaveProjectHandler, SaveProjectResult};
pub use set_judgment::{SetJudgmentCommand, SetJudgmentHandler};
