//! Expert Report - Aggregated voting outcome for presentation.

use serde::{Deserialize, Serialize};

use super::ExpertProject;

/// One panel member's standing in the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertStanding {
    pub expert: String,
    pub relative_weight: f64,
    pub recorded_points: u32,
    pub remaining_budget: u32,
}

/// Full evaluation of an [`ExpertProject`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertReport {
    pub project: String,
    pub target: String,
    pub experts: Vec<ExpertStanding>,
    pub scores: Vec<(String, f64)>,
    pub best_alternative: Option<String>,
}

impl ExpertReport {
    pub fn evaluate(project: &ExpertProject) -> Self {
        let experts = project
            .experts()
            .iter()
            .zip(project.relative_weights())
            .zip(project.recorded_totals())
            .map(|((expert, weight), recorded)| ExpertStanding {
                expert: expert.name().to_string(),
                relative_weight: *weight,
                recorded_points: recorded,
                remaining_budget: expert.remaining_budget(),
            })
            .collect();

        Self {
            project: project.name().to_string(),
            target: project.target().to_string(),
            experts,
            scores: project.result(),
            best_alternative: project.best_alternative().map(|(label, _)| label),
        }
    }

    /// True while no expert has recorded any points.
    pub fn is_empty(&self) -> bool {
        self.experts.iter().all(|e| e.recorded_points == 0)
    }
}
