//! RecordVoteHandler - Command handler for casting a vote in a stored project.

use std::sync::Arc;

use super::ProjectError;
use crate::domain::foundation::ProjectId;
use crate::domain::project::{ProjectKind, ProjectType};
use crate::ports::ProjectRepository;

/// Command to record `rate` points from `expert` for `alternative`.
#[derive(Debug, Clone)]
pub struct RecordVoteCommand {
    pub id: ProjectId,
    pub expert: String,
    pub alternative: String,
    pub rate: u32,
}

/// Result of a recorded vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordVoteResult {
    /// Points actually recorded after clamping to the budget.
    pub recorded: u32,
    pub remaining_budget: u32,
}

/// Handler for recording votes.
pub struct RecordVoteHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl RecordVoteHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RecordVoteCommand) -> Result<RecordVoteResult, ProjectError> {
        // 1. Load
        let mut document = self.repository.load(cmd.id).await?;

        // 2. Apply
        let result = match document.project_mut() {
            ProjectKind::Expert(project) => {
                let recorded = project.vote(&cmd.expert, &cmd.alternative, cmd.rate)?;
                RecordVoteResult {
                    recorded,
                    remaining_budget: project.remaining_budget(&cmd.expert)?,
                }
            }
            ProjectKind::Ahp(_) => {
                return Err(ProjectError::wrong_kind(
                    cmd.id,
                    ProjectType::Expert,
                    ProjectType::Ahp,
                ))
            }
        };

        // 3. Persist
        document.touch();
        self.repository.save(&document).await?;

        Ok(result)
    }
}
