//! AHP Report - Everything the presentation layer renders after a calculation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AhpProject, ComparisonMatrix};

/// Priority vector and consistency diagnosis for one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixSummary {
    pub priority_vector: Vec<(String, f64)>,
    pub consistency_ratio: f64,
    pub consistent: bool,
}

impl MatrixSummary {
    /// Summarises `matrix` against a consistency `threshold`.
    pub fn of(matrix: &ComparisonMatrix, threshold: f64) -> Self {
        let consistency_ratio = matrix.consistency_ratio();
        Self {
            priority_vector: matrix.priority_vector(),
            consistency_ratio,
            consistent: consistency_ratio <= threshold,
        }
    }
}

/// Summary of the alternative matrix judged under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionSummary {
    pub criterion: String,
    pub summary: MatrixSummary,
}

/// Full evaluation of an [`AhpProject`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AhpReport {
    pub project: String,
    pub target: String,
    pub threshold: f64,
    pub criteria: MatrixSummary,
    pub alternatives: Vec<CriterionSummary>,
    pub global_vector: Vec<(String, f64)>,
    pub best_alternative: Option<String>,
}

impl AhpReport {
    /// Evaluates every matrix of `project` and the global ranking.
    pub fn evaluate(project: &AhpProject, threshold: f64) -> Self {
        let criteria = MatrixSummary::of(project.criteria_matrix(), threshold);
        if !criteria.consistent {
            warn!(
                project = %project.name(),
                cr = criteria.consistency_ratio,
                "Criteria judgments are inconsistent"
            );
        }

        let alternatives = project
            .alternative_matrices()
            .map(|(criterion, matrix)| {
                let summary = MatrixSummary::of(matrix, threshold);
                if !summary.consistent {
                    warn!(
                        project = %project.name(),
                        criterion,
                        cr = summary.consistency_ratio,
                        "Alternative judgments are inconsistent"
                    );
                }
                CriterionSummary {
                    criterion: criterion.to_string(),
                    summary,
                }
            })
            .collect();

        Self {
            project: project.name().to_string(),
            target: project.target().to_string(),
            threshold,
            criteria,
            alternatives,
            global_vector: project.global_vector(),
            best_alternative: project.best_alternative().map(|(label, _)| label),
        }
    }

    /// Returns true when every matrix passes the consistency threshold.
    pub fn all_consistent(&self) -> bool {
        self.criteria.consistent && self.alternatives.iter().all(|c| c.summary.consistent)
    }

    /// Labels of the matrices that fail the threshold; `None` stands for the
    /// criteria matrix.
    pub fn inconsistent_matrices(&self) -> Vec<Option<&str>> {
        let mut failing = Vec::new();
        if !self.criteria.consistent {
            failing.push(None);
        }
        failing.extend(
            self.alternatives
                .iter()
                .filter(|c| !c.summary.consistent)
                .map(|c| Some(c.criterion.as_str())),
        );
        failing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::CONSISTENCY_THRESHOLD;

    fn project() -> AhpProject {
        AhpProject::new(
            "Hiring",
            "Choose a candidate",
            vec!["Skill", "Culture", "Cost"],
            vec!["Ann", "Ben", "Cid"],
        )
        .unwrap()
    }

    #[test]
    fn neutral_project_is_fully_consistent() {
        let report = AhpReport::evaluate(&project(), CONSISTENCY_THRESHOLD);

        assert!(report.all_consistent());
        assert!(report.inconsistent_matrices().is_empty());
        assert_eq!(report.criteria.consistency_ratio, 0.0);
        assert_eq!(report.alternatives.len(), 3);
        assert_eq!(report.best_alternative.as_deref(), Some("Ann"));
        assert_eq!(report.project, "Hiring");
    }

    #[test]
    fn flags_inconsistent_alternative_matrix() {
        let mut p = project();
        p.set_alternative_judgment("Culture", "Ann", "Ben", 5).unwrap();
        p.set_alternative_judgment("Culture", "Ben", "Cid", 5).unwrap();
        p.set_alternative_judgment("Culture", "Cid", "Ann", 5).unwrap();

        let report = AhpReport::evaluate(&p, CONSISTENCY_THRESHOLD);
        assert!(!report.all_consistent());
        assert_eq!(report.inconsistent_matrices(), vec![Some("Culture")]);
        assert!(report.criteria.consistent);
    }

    #[test]
    fn flags_inconsistent_criteria_matrix() {
        let mut p = project();
        p.set_criteria_judgment("Skill", "Culture", 9).unwrap();
        p.set_criteria_judgment("Culture", "Cost", 9).unwrap();
        p.set_criteria_judgment("Cost", "Skill", 9).unwrap();

        let report = AhpReport::evaluate(&p, CONSISTENCY_THRESHOLD);
        assert_eq!(report.inconsistent_matrices(), vec![None]);
    }

    #[test]
    fn report_carries_global_vector_of_project() {
        let mut p = project();
        p.set_alternative_judgment("Skill", "Cid", "Ann", 3).unwrap();

        let report = AhpReport::evaluate(&p, CONSISTENCY_THRESHOLD);
        assert_eq!(report.global_vector, p.global_vector());
        assert_eq!(report.best_alternative.as_deref(), Some("Cid"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = AhpReport::evaluate(&project(), CONSISTENCY_THRESHOLD);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("global_vector"));
        assert!(json.contains("consistency_ratio"));
    }
}
