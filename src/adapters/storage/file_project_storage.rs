//! File-based Project Storage Adapter
//!
//! Stores each project document as `<project_id>.yaml` under a base directory.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::domain::foundation::ProjectId;
use crate::domain::project::ProjectDocument;
use crate::ports::{ProjectRepository, StorageError};

const EXTENSION: &str = "yaml";

/// File-based storage for project documents
#[derive(Debug, Clone)]
pub struct FileProjectStorage {
    base_path: PathBuf,
}

impl FileProjectStorage {
    /// Create a new file storage with a base directory
    ///
    /// The directory is created on the first save.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileProjectStorage::new("./data/projects");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a project
    fn document_path(&self, id: ProjectId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, EXTENSION))
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }
}

#[async_trait]
impl ProjectRepository for FileProjectStorage {
    async fn save(&self, document: &ProjectDocument) -> Result<(), StorageError> {
        self.ensure_dir().await?;

        let yaml = document
            .to_yaml()
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        let file_path = self.document_path(document.id());
        fs::write(&file_path, yaml)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        debug!(project_id = %document.id(), path = %file_path.display(), "Project written");
        Ok(())
    }

    async fn load(&self, id: ProjectId) -> Result<ProjectDocument, StorageError> {
        let file_path = self.document_path(id);

        if !file_path.exists() {
            return Err(StorageError::NotFound(id));
        }

        let yaml = fs::read_to_string(&file_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        ProjectDocument::from_yaml(&yaml)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))
    }

    async fn exists(&self, id: ProjectId) -> Result<bool, StorageError> {
        Ok(self.document_path(id).exists())
    }

    async fn delete(&self, id: ProjectId) -> Result<(), StorageError> {
        let file_path = self.document_path(id);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }

        Ok(())
    }

    async fn list(&self) -> Result<Vec<ProjectId>, StorageError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            // Files not named after a project id are ignored.
            if let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse::<ProjectId>().ok())
            {
                ids.push(id);
            }
        }

        ids.sort_by_key(|id| *id.as_uuid());
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::AhpProject;
    use crate::domain::project::ProjectKind;
    use crate::domain::voting::{Degree, Expert, ExpertProject, Position};
    use tempfile::TempDir;

    fn ahp_document() -> ProjectDocument {
        let mut project = AhpProject::new(
            "Vendor",
            "Select a vendor",
            vec!["Quality", "Price", "Support"],
            vec!["Acme", "Globex", "Initech"],
        )
        .unwrap();
        project.set_criteria_judgment("Quality", "Price", 5).unwrap();
        ProjectDocument::new(project)
    }

    fn expert_document() -> ProjectDocument {
        let panel = vec![Expert::new("Lena", Position::DepartmentHead, Degree::Phd).unwrap()];
        let mut project =
            ExpertProject::new("Roadmap", "Next feature", vec!["Sync", "Search", "Export"], panel)
                .unwrap();
        project.vote("Lena", "Search", 80).unwrap();
        ProjectDocument::new(project)
    }

    #[tokio::test]
    async fn test_file_storage_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path());

        let document = ahp_document();
        storage.save(&document).await.unwrap();

        let loaded = storage.load(document.id()).await.unwrap();
        assert_eq!(loaded, document);
    }

    #[tokio::test]
    async fn test_file_storage_writes_yaml_named_after_id() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path());

        let document = expert_document();
        storage.save(&document).await.unwrap();

        let path = temp_dir.path().join(format!("{}.yaml", document.id()));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("kind: expert"));
    }

    #[tokio::test]
    async fn test_file_storage_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path());

        let result = storage.load(ProjectId::new()).await;
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_file_storage_load_corrupt_document() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path());

        let id = ProjectId::new();
        std::fs::write(temp_dir.path().join(format!("{}.yaml", id)), "kind: [").unwrap();

        let result = storage.load(id).await;
        assert!(matches!(result, Err(StorageError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn test_file_storage_exists_and_delete() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path());

        let document = ahp_document();
        assert!(!storage.exists(document.id()).await.unwrap());

        storage.save(&document).await.unwrap();
        assert!(storage.exists(document.id()).await.unwrap());

        storage.delete(document.id()).await.unwrap();
        assert!(!storage.exists(document.id()).await.unwrap());

        // Deleting again is fine
        storage.delete(document.id()).await.unwrap();
    }

    #[tokio::test]
    async fn test_file_storage_overwrites_on_save() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path());

        let mut document = expert_document();
        storage.save(&document).await.unwrap();

        if let ProjectKind::Expert(project) = document.project_mut() {
            project.clear();
        }
        storage.save(&document).await.unwrap();

        let loaded = storage.load(document.id()).await.unwrap();
        match loaded.project() {
            ProjectKind::Expert(project) => {
                assert_eq!(project.votes("Lena", "Search").unwrap(), 0);
                assert_eq!(project.remaining_budget("Lena").unwrap(), 100);
            }
            other => panic!("unexpected project {:?}", other.project_type()),
        }
    }

    #[tokio::test]
    async fn test_file_storage_list() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path());

        let first = ahp_document();
        let second = expert_document();
        storage.save(&first).await.unwrap();
        storage.save(&second).await.unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();
        std::fs::write(temp_dir.path().join("draft.yaml"), "ignored").unwrap();

        let ids = storage.list().await.unwrap();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&first.id()));
        assert!(ids.contains(&second.id()));
    }

    #[tokio::test]
    async fn test_file_storage_list_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileProjectStorage::new(temp_dir.path().join("absent"));

        assert!(storage.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_file_storage_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let storage = FileProjectStorage::new(&nested);

        storage.save(&ahp_document()).await.unwrap();
        assert!(storage.base_path().is_dir());
    }
}
