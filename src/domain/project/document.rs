//! Project Document - A named, identified project as it is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

use crate::domain::ahp::AhpProject;
use crate::domain::foundation::{ProjectId, Timestamp};
use crate::domain::voting::ExpertProject;

/// Which engine a document holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Ahp,
    Expert,
}

impl ProjectType {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::Ahp => "AHP",
            ProjectType::Expert => "Expert voting",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The engine state carried by a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectKind {
    Ahp(AhpProject),
    Expert(ExpertProject),
}

impl ProjectKind {
    pub fn project_type(&self) -> ProjectType {
        match self {
            ProjectKind::Ahp(_) => ProjectType::Ahp,
            ProjectKind::Expert(_) => ProjectType::Expert,
        }
    }

    /// Name given to the project when it was created.
    pub fn name(&self) -> &str {
        match self {
            ProjectKind::Ahp(p) => p.name(),
            ProjectKind::Expert(p) => p.name(),
        }
    }
}

impl From<AhpProject> for ProjectKind {
    fn from(project: AhpProject) -> Self {
        ProjectKind::Ahp(project)
    }
}

impl From<ExpertProject> for ProjectKind {
    fn from(project: ExpertProject) -> Self {
        ProjectKind::Expert(project)
    }
}

/// A project plus the metadata it is stored under.
///
/// The document name is the engine's own project name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    id: ProjectId,
    saved_at: Timestamp,
    project: ProjectKind,
}

impl ProjectDocument {
    /// Wraps `project` under a fresh id.
    pub fn new(project: impl Into<ProjectKind>) -> Self {
        Self {
            id: ProjectId::new(),
            saved_at: Timestamp::now(),
            project: project.into(),
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.project.name()
    }

    pub fn saved_at(&self) -> Timestamp {
        self.saved_at
    }

    pub fn project(&self) -> &ProjectKind {
        &self.project
    }

    pub fn project_mut(&mut self) -> &mut ProjectKind {
        &mut self.project
    }

    pub fn project_type(&self) -> ProjectType {
        self.project.project_type()
    }

    /// Marks the document as saved now.
    pub fn touch(&mut self) {
        self.saved_at = Timestamp::now();
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Parses a document; every engine invariant is re-checked.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml).map_err(|e| {
            warn!(error = %e, "Rejected project document");
            e
        })
    }
}
