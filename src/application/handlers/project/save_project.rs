//! SaveProjectHandler - Command handler for persisting projects.

use std::sync::Arc;
use tracing::info;

use super::ProjectError;
use crate::domain::foundation::{ProjectId, Timestamp};
use crate::domain::project::ProjectDocument;
use crate::ports::ProjectRepository;

/// Command to save a project document.
#[derive(Debug, Clone)]
pub struct SaveProjectCommand {
    pub document: ProjectDocument,
}

/// Result of a successful save.
#[derive(Debug, Clone)]
pub struct SaveProjectResult {
    pub id: ProjectId,
    pub saved_at: Timestamp,
    pub document: ProjectDocument,
}

/// Handler for saving projects.
pub struct SaveProjectHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl SaveProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SaveProjectCommand) -> Result<SaveProjectResult, ProjectError> {
        let mut document = cmd.document;

        // 1. Stamp the save time
        document.touch();

        // 2. Persist
        self.repository.save(&document).await?;

        info!(
            project_id = %document.id(),
            name = %document.name(),
            kind = %document.project_type(),
            "Project saved"
        );

        Ok(SaveProjectResult {
            id: document.id(),
            saved_at: document.saved_at(),
            document,
        })
    }
}
