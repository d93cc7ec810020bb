//! Project Repository Port - Interface for persisting project documents.
//!
//! Implemented by the file-based adapter for real use and by the in-memory
//! adapter for tests.

use async_trait::async_trait;

use crate::domain::foundation::ProjectId;
use crate::domain::project::ProjectDocument;

/// Errors that can occur during project storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Failed to serialize project: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize project: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Port for persisting and loading project documents
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Save a document, replacing any previous version with the same id
    ///
    /// # Errors
    /// Returns `StorageError` if save fails
    async fn save(&self, document: &ProjectDocument) -> Result<(), StorageError>;

    /// Load a document
    ///
    /// # Errors
    /// Returns `StorageError::NotFound` if no document exists
    async fn load(&self, id: ProjectId) -> Result<ProjectDocument, StorageError>;

    /// Check if a document exists
    async fn exists(&self, id: ProjectId) -> Result<bool, StorageError>;

    /// Delete a document; deleting a missing document is not an error
    async fn delete(&self, id: ProjectId) -> Result<(), StorageError>;

    /// List the ids of every stored document
    async fn list(&self) -> Result<Vec<ProjectId>, StorageError>;
}
