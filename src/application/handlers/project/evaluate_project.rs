//! EvaluateProjectHandler - Query handler computing a stored project's outcome.

use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use super::ProjectError;
use crate::config::AnalysisConfig;
use crate::domain::ahp::AhpReport;
use crate::domain::foundation::ProjectId;
use crate::domain::project::ProjectKind;
use crate::domain::voting::ExpertReport;
use crate::ports::ProjectRepository;

/// Query to evaluate a stored project.
#[derive(Debug, Clone)]
pub struct EvaluateProjectQuery {
    pub id: ProjectId,
}

/// Outcome of either engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evaluation {
    Ahp(AhpReport),
    Expert(ExpertReport),
}

impl Evaluation {
    /// Label of the winning alternative, if any.
    pub fn best_alternative(&self) -> Option<&str> {
        match self {
            Evaluation::Ahp(report) => report.best_alternative.as_deref(),
            Evaluation::Expert(report) => report.best_alternative.as_deref(),
        }
    }
}

/// Handler for evaluating projects.
pub struct EvaluateProjectHandler {
    repository: Arc<dyn ProjectRepository>,
    consistency_threshold: f64,
}

impl EvaluateProjectHandler {
    pub fn new(repository: Arc<dyn ProjectRepository>, consistency_threshold: f64) -> Self {
        Self {
            repository,
            consistency_threshold,
        }
    }

    pub fn from_config(repository: Arc<dyn ProjectRepository>, config: &AnalysisConfig) -> Self {
        Self::new(repository, config.consistency_threshold)
    }

    pub async fn handle(&self, query: EvaluateProjectQuery) -> Result<Evaluation, ProjectError> {
        let document = self.repository.load(query.id).await?;

        let evaluation = match document.project() {
            ProjectKind::Ahp(project) => {
                Evaluation::Ahp(AhpReport::evaluate(project, self.consistency_threshold))
            }
            ProjectKind::Expert(project) => Evaluation::Expert(ExpertReport::evaluate(project)),
        };

        info!(
            project_id = %query.id,
            best = ?evaluation.best_alternative(),
            "Project evaluated"
        );
        Ok(evaluation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProjectStorage;
    use crate::domain::ahp::AhpProject;
    use crate::domain::project::ProjectDocument;
    use crate::domain::voting::{Degree, Expert, ExpertProject, Position};

    fn inconsistent_ahp() -> AhpProject {
        let mut project = AhpProject::new(
            "Trip",
            "Choose a destination",
            vec!["Cost", "Weather", "Food"],
            vec!["Lisbon", "Oslo", "Rome"],
        )
        .unwrap();
        project.set_criteria_judgment("Cost", "Weather", 2).unwrap();
        project.set_criteria_judgment("Weather", "Food", 2).unwrap();
        project.set_criteria_judgment("Food", "Cost", 2).unwrap();
        project
    }

    async fn store(repo: &InMemoryProjectStorage, document: ProjectDocument) -> ProjectId {
        repo.save(&document).await.unwrap();
        document.id()
    }

    #[tokio::test]
    async fn evaluates_ahp_project_with_configured_threshold() {
        let repo = Arc::new(InMemoryProjectStorage::new());
        let id = store(&repo, ProjectDocument::new(inconsistent_ahp())).await;

        let strict = EvaluateProjectHandler::new(repo.clone(), 0.10);
        let lenient = EvaluateProjectHandler::from_config(
            repo,
            &AnalysisConfig {
                consistency_threshold: 1.0,
            },
        );

        match strict.handle(EvaluateProjectQuery { id }).await.unwrap() {
            Evaluation::Ahp(report) => {
                assert!(!report.criteria.consistent);
                assert_eq!(report.threshold, 0.10);
            }
            other => panic!("unexpected evaluation {:?}", other),
        }
        match lenient.handle(EvaluateProjectQuery { id }).await.unwrap() {
            Evaluation::Ahp(report) => assert!(report.criteria.consistent),
            other => panic!("unexpected evaluation {:?}", other),
        }
    }

    #[tokio::test]
    async fn evaluates_expert_project() {
        let repo = Arc::new(InMemoryProjectStorage::new());
        let panel = vec![
            Expert::new("Olga", Position::ComplexHead, Degree::Academician).unwrap(),
            Expert::new("Petr", Position::LeadEngineer, Degree::Specialist).unwrap(),
        ];
        let mut project =
            ExpertProject::new("Fleet", "Buy trucks", vec!["Volvo", "MAN", "Scania"], panel)
                .unwrap();
        project.vote("Olga", "Scania", 100).unwrap();
        project.vote("Petr", "MAN", 100).unwrap();
        let id = store(&repo, ProjectDocument::new(project)).await;

        let handler = EvaluateProjectHandler::new(repo, 0.10);
        let evaluation = handler.handle(EvaluateProjectQuery { id }).await.unwrap();

        assert_eq!(evaluation.best_alternative(), Some("Scania"));
        assert!(matches!(evaluation, Evaluation::Expert(_)));
    }

    #[tokio::test]
    async fn fails_when_project_not_found() {
        let handler = EvaluateProjectHandler::new(Arc::new(InMemoryProjectStorage::new()), 0.10);

        let result = handler
            .handle(EvaluateProjectQuery {
                id: ProjectId::new(),
            })
            .await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn evaluation_serializes_with_kind_tag() {
        let report = AhpReport::evaluate(&inconsistent_ahp(), 0.10);
        let json = serde_json::to_string(&Evaluation::Ahp(report)).unwrap();
        assert!(json.contains("\"kind\":\"ahp\""));
    }
}
