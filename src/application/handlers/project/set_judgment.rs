//! SetJudgmentHandler - Command handler for entering a pairwise judgment.

use std::sync::Arc;

use super::ProjectError;
use crate::domain::foundation::{Judgment, JudgmentInput, ProjectId};
use crate::domain::project::{ProjectKind, ProjectType};
use crate::ports::ProjectRepository;

/// Command to judge item `a` against item `b`.
///
/// With `criterion` unset the judgment goes into the criteria matrix;
/// otherwise into the alternative matrix of that criterion.
#[derive(Debug, Clone)]
pub struct SetJudgmentCommand {
    pub id: ProjectId,
    pub criterion: Option<String>,
    pub a: String,
    pub b: String,
    pub value: JudgmentInput,
}

/// Handler for setting judgments.
pub struct SetJudgmentHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl SetJudgmentHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Returns the judgment stored at `(a, b)` after the update.
    pub async fn handle(&self, cmd: SetJudgmentCommand) -> Result<Judgment, ProjectError> {
        let mut document = self.repository.load(cmd.id).await?;

        let stored = match document.project_mut() {
            ProjectKind::Ahp(project) => match &cmd.criterion {
                None => {
                    project.set_criteria_judgment(&cmd.a, &cmd.b, cmd.value)?;
                    project.criteria_matrix().get(&cmd.a, &cmd.b)?
                }
                Some(criterion) => {
                    project.set_alternative_judgment(criterion, &cmd.a, &cmd.b, cmd.value)?;
                    project.alternative_matrix(criterion)?.get(&cmd.a, &cmd.b)?
                }
            },
            ProjectKind::Expert(_) => {
                return Err(ProjectError::wrong_kind(
                    cmd.id,
                    ProjectType::Ahp,
                    ProjectType::Expert,
                ))
            }
        };

        document.touch();
        self.repository.save(&document).await?;

        Ok(stored)
    }
}
