//! In-Memory Project Storage Adapter
//!
//! Stores project documents in memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ProjectId;
use crate::domain::project::ProjectDocument;
use crate::ports::{ProjectRepository, StorageError};

/// In-memory storage for project documents
#[derive(Debug, Clone)]
pub struct InMemoryProjectStorage {
    documents: Arc<RwLock<HashMap<ProjectId, ProjectDocument>>>,
}

impl InMemoryProjectStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored documents (useful for tests)
    pub async fn clear(&self) {
        self.documents.write().await.clear();
    }

    /// Get the number of stored documents
    pub async fn document_count(&self) -> usize {
        self.documents.read().await.len()
    }
}

impl Default for InMemoryProjectStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStorage {
    async fn save(&self, document: &ProjectDocument) -> Result<(), StorageError> {
        let mut documents = self.documents.write().await;
        documents.insert(document.id(), document.clone());
        Ok(())
    }

    async fn load(&self, id: ProjectId) -> Result<ProjectDocument, StorageError> {
        let documents = self.documents.read().await;
        documents
            .get(&id)
            .cloned()
            .ok_or(StorageError::NotFound(id))
    }

    async fn exists(&self, id: ProjectId) -> Result<bool, StorageError> {
        let documents = self.documents.read().await;
        Ok(documents.contains_key(&id))
    }

    async fn delete(&self, id: ProjectId) -> Result<(), StorageError> {
        self.documents.write().await.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ProjectId>, StorageError> {
        let documents = self.documents.read().await;
        let mut ids: Vec<ProjectId> = documents.keys().copied().collect();
        ids.sort_by_key(|id| *id.as_uuid());
        Ok(ids)
    }
}
