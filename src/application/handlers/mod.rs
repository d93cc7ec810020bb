//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod project;

pub use project::{
    EvaluateProjectHandler, EvaluateProjectQuery, Evaluation, OpenProjectHandler,
    OpenProjectQuery, ProjectError, RecordVoteCommand, RecordVoteHandler, RecordVoteResult,
    SaveProjectCommand, SaveProjectHandler, SaveProjectResult, SetJudgmentCommand,
    SetJudgmentHandler,
};
