//! Expert - A named voter with a competency index and a vote budget.

use serde::{Deserialize, Serialize};

use super::competency::{competency_score, Degree, Position, COMPETENCY_SCALE};
use super::VoteBudget;
use crate::domain::foundation::AnalysisError;

/// An expert taking part in budgeted voting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExpertRecord", into = "ExpertRecord")]
pub struct Expert {
    name: String,
    position: Position,
    degree: Degree,
    competency_index: f64,
    budget: VoteBudget,
}

impl Expert {
    /// Creates an expert with a full vote budget.
    ///
    /// # Errors
    /// `IncompatibleCompetency` when the position cannot hold the degree.
    pub fn new(
        name: impl Into<String>,
        position: Position,
        degree: Degree,
    ) -> Result<Self, AnalysisError> {
        let competency_index = competency_score(position, degree).ok_or_else(|| {
            AnalysisError::IncompatibleCompetency {
                position: position.to_string(),
                degree: degree.to_string(),
            }
        })?;

        Ok(Self {
            name: name.into(),
            position,
            degree,
            competency_index,
            budget: VoteBudget::FULL,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// Raw competency score from the position/degree table.
    pub fn competency_index(&self) -> f64 {
        self.competency_index
    }

    /// Competency on the 0–1 display scale.
    pub fn scaled_index(&self) -> f64 {
        self.competency_index / COMPETENCY_SCALE
    }

    /// Points the expert can still spend this round.
    pub fn remaining_budget(&self) -> u32 {
        self.budget.remaining()
    }

    pub(crate) fn budget_mut(&mut self) -> &mut VoteBudget {
        &mut self.budget
    }
}

/// Serialised form of an [`Expert`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertRecord {
    pub name: String,
    pub position: Position,
    pub degree: Degree,
    pub competency_index: f64,
    pub remaining_budget: VoteBudget,
}

impl From<Expert> for ExpertRecord {
    fn from(expert: Expert) -> Self {
        Self {
            name: expert.name,
            position: expert.position,
            degree: expert.degree,
            competency_index: expert.competency_index,
            remaining_budget: expert.budget,
        }
    }
}

impl TryFrom<ExpertRecord> for Expert {
    type Error = AnalysisError;

    /// Restores an expert; the stored index must agree with the table.
    fn try_from(record: ExpertRecord) -> Result<Self, Self::Error> {
        let mut expert = Expert::new(record.name, record.position, record.degree)?;
        if (expert.competency_index - record.competency_index).abs() > 1e-9 {
            return Err(AnalysisError::construction(format!(
                "competency index {} of '{}' does not match {} / {}",
                record.competency_index, expert.name, expert.position, expert.degree
            )));
        }
        expert.budget = record.remaining_budget;
        Ok(expert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_looks_up_competency_index() {
        let expert = Expert::new("Ivanov", Position::Director, Degree::DoctorOfSciences).unwrap();
        assert_eq!(expert.name(), "Ivanov");
        assert_eq!(expert.competency_index(), 8.0);
        assert!((expert.scaled_index() - 0.64).abs() < 1e-12);
        assert_eq!(expert.remaining_budget(), 100);
    }

    #[test]
    fn new_rejects_incompatible_pair() {
        let err = Expert::new("Petrov", Position::LeadEngineer, Degree::Academician).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::IncompatibleCompetency {
                position: "Lead Engineer".to_string(),
                degree: "Academician".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "An expert with position 'Lead Engineer' cannot hold degree 'Academician'"
        );
    }

    #[test]
    fn serde_round_trip_keeps_budget() {
        let mut expert = Expert::new("Sidorova", Position::SectorHead, Degree::Phd).unwrap();
        expert.budget_mut().spend(35);

        let yaml = serde_yaml::to_string(&expert).unwrap();
        assert!(yaml.contains("remaining_budget: 65"));
        let restored: Expert = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(restored, expert);
    }

    #[test]
    fn deserialization_rejects_tampered_index() {
        let json = r#"{
            "name": "X",
            "position": "sector_head",
            "degree": "phd",
            "competency_index": 11.0,
            "remaining_budget": 100
        }"#;
        assert!(serde_json::from_str::<Expert>(json).is_err());
    }
}
