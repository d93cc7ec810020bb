//! OpenProjectHandler - Query handler for loading a stored project.

use std::sync::Arc;
use tracing::info;

use super::ProjectError;
use crate::domain::foundation::ProjectId;
use crate::domain::project::{ProjectDocument, ProjectType};
use crate::ports::ProjectRepository;

/// Query to open a project, optionally insisting on its engine.
#[derive(Debug, Clone)]
pub struct OpenProjectQuery {
    pub id: ProjectId,
    pub expected: Option<ProjectType>,
}

impl OpenProjectQuery {
    pub fn any(id: ProjectId) -> Self {
        Self { id, expected: None }
    }

    pub fn of_type(id: ProjectId, expected: ProjectType) -> Self {
        Self {
            id,
            expected: Some(expected),
        }
    }
}

/// Handler for opening projects.
pub struct OpenProjectHandler {
    repository: Arc<dyn ProjectRepository>,
}

impl OpenProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: OpenProjectQuery) -> Result<ProjectDocument, ProjectError> {
        let document = self.repository.load(query.id).await?;

        if let Some(expected) = query.expected {
            let actual = document.project_type();
            if actual != expected {
                return Err(ProjectError::wrong_kind(query.id, expected, actual));
            }
        }

        info!(
            project_id = %document.id(),
            name = %document.name(),
            kind = %document.project_type(),
            "Project opened"
        );
        Ok(document)
    }
}
