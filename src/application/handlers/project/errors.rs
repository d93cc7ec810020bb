//! Errors raised by project handlers.

use thiserror::Error;

use crate::domain::foundation::{AnalysisError, ProjectId};
use crate::domain::project::ProjectType;
use crate::ports::StorageError;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Project {id} is an {actual} project, expected {expected}")]
    WrongProjectKind {
        id: ProjectId,
        expected: ProjectType,
        actual: ProjectType,
    },
}

impl ProjectError {
    pub fn wrong_kind(id: ProjectId, expected: ProjectType, actual: ProjectType) -> Self {
        ProjectError::WrongProjectKind {
            id,
            expected,
            actual,
        }
    }

    /// Returns true when the requested project does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProjectError::Storage(StorageError::NotFound(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_kind_names_both_types() {
        let err = ProjectError::wrong_kind(ProjectId::new(), ProjectType::Ahp, ProjectType::Expert);
        let msg = err.to_string();
        assert!(msg.contains("Expert voting"));
        assert!(msg.contains("expected AHP"));
    }

    #[test]
    fn storage_errors_convert() {
        let id = ProjectId::new();
        let err: ProjectError = StorageError::NotFound(id).into();
        assert!(err.is_not_found());
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn analysis_errors_convert_transparently() {
        let err: ProjectError = AnalysisError::unknown_item("Nobody").into();
        assert_eq!(err.to_string(), "Unknown item: 'Nobody'");
        assert!(!err.is_not_found());
    }
}
