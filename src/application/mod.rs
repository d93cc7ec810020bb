//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers load a project, apply one engine operation and persist it;
//! query handlers only read.

pub mod handlers;

pub use handlers::{
    EvaluateProjectHandler, EvaluateProjectQuery, Evaluation, OpenProjectHandler,
    OpenProjectQuery, ProjectError, RecordVoteCommand, RecordVoteHandler, RecordVoteResult,
    SaveProjectCommand, SaveProjectHandler, SaveProjectResult, SetJudgmentCommand,
    SetJudgmentHandler,
};
