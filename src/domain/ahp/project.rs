//! AHP Project - Criteria matrix plus one alternative matrix per criterion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::ComparisonMatrix;
use crate::domain::foundation::{first_best, AnalysisError, JudgmentInput};

/// A two-level analytic hierarchy: criteria judged against each other, and
/// alternatives judged against each other separately under every criterion.
///
/// Every per-criterion matrix is built over the same alternative list, and
/// alternative edits go through this type so that list never diverges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AhpProjectSnapshot", into = "AhpProjectSnapshot")]
pub struct AhpProject {
    name: String,
    target: String,
    criteria: ComparisonMatrix,
    alternatives: Vec<String>,
    /// Aligned with `criteria.items()`.
    alternative_matrices: Vec<ComparisonMatrix>,
}

impl AhpProject {
    /// Creates a project with all-neutral judgments everywhere.
    ///
    /// # Errors
    /// `Construction` if either item list is out of bounds or has duplicates.
    pub fn new<C, A, S, T>(
        name: impl Into<String>,
        target: impl Into<String>,
        criteria: C,
        alternatives: A,
    ) -> Result<Self, AnalysisError>
    where
        C: IntoIterator<Item = S>,
        A: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let criteria = ComparisonMatrix::new(criteria)?;
        let template = ComparisonMatrix::new(alternatives)?;
        let alternatives = template.items().to_vec();
        let alternative_matrices = vec![template; criteria.size()];

        Ok(Self {
            name: name.into(),
            target: target.into(),
            criteria,
            alternatives,
            alternative_matrices,
        })
    }

    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the decision target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the criteria labels in declaration order.
    pub fn criteria(&self) -> &[String] {
        self.criteria.items()
    }

    /// Returns the alternative labels in declaration order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the criteria-level matrix.
    pub fn criteria_matrix(&self) -> &ComparisonMatrix {
        &self.criteria
    }

    /// Returns the alternative matrix judged under `criterion`.
    pub fn alternative_matrix(&self, criterion: &str) -> Result<&ComparisonMatrix, AnalysisError> {
        let index = self.criterion_index(criterion)?;
        Ok(&self.alternative_matrices[index])
    }

    /// Iterates `(criterion, alternative matrix)` in criteria order.
    pub fn alternative_matrices(&self) -> impl Iterator<Item = (&str, &ComparisonMatrix)> {
        self.criteria
            .items()
            .iter()
            .map(String::as_str)
            .zip(self.alternative_matrices.iter())
    }

    fn criterion_index(&self, criterion: &str) -> Result<usize, AnalysisError> {
        self.criteria
            .items()
            .iter()
            .position(|c| c == criterion)
            .ok_or_else(|| AnalysisError::unknown_item(criterion))
    }

    /// Judges criterion `a` against criterion `b`.
    pub fn set_criteria_judgment(
        &mut self,
        a: &str,
        b: &str,
        value: impl Into<JudgmentInput>,
    ) -> Result<(), AnalysisError> {
        self.criteria.set(a, b, value)
    }

    /// Judges alternative `a` against alternative `b` under `criterion`.
    pub fn set_alternative_judgment(
        &mut self,
        criterion: &str,
        a: &str,
        b: &str,
        value: impl Into<JudgmentInput>,
    ) -> Result<(), AnalysisError> {
        let index = self.criterion_index(criterion)?;
        self.alternative_matrices[index].set(a, b, value)
    }

    /// Adds a criterion with a fresh, all-neutral alternative matrix.
    pub fn add_criterion(&mut self, criterion: impl Into<String>) -> Result<(), AnalysisError> {
        let criterion = criterion.into();
        let matrix = ComparisonMatrix::new(self.alternatives.clone())?;

        self.criteria.add(criterion.clone())?;
        self.alternative_matrices.push(matrix);
        debug!(project = %self.name, criterion = %criterion, "Criterion added");
        Ok(())
    }

    /// Removes a criterion together with its alternative matrix.
    pub fn remove_criterion(&mut self, criterion: &str) -> Result<(), AnalysisError> {
        self.criteria.check_can_remove(criterion)?;
        let index = self.criterion_index(criterion)?;

        self.criteria.remove(criterion)?;
        self.alternative_matrices.remove(index);
        debug!(project = %self.name, criterion, "Criterion removed");
        Ok(())
    }

    /// Adds an alternative to every per-criterion matrix.
    ///
    /// All matrices are checked before any is touched.
    pub fn add_alternative(&mut self, alternative: impl Into<String>) -> Result<(), AnalysisError> {
        let alternative = alternative.into();
        for matrix in &self.alternative_matrices {
            matrix.check_can_add(&alternative)?;
        }

        for matrix in &mut self.alternative_matrices {
            matrix.add(alternative.clone())?;
        }
        debug!(project = %self.name, alternative = %alternative, "Alternative added");
        self.alternatives.push(alternative);
        Ok(())
    }

    /// Removes an alternative from every per-criterion matrix.
    pub fn remove_alternative(&mut self, alternative: &str) -> Result<(), AnalysisError> {
        for matrix in &self.alternative_matrices {
            matrix.check_can_remove(alternative)?;
        }

        for matrix in &mut self.alternative_matrices {
            matrix.remove(alternative)?;
        }
        self.alternatives.retain(|a| a != alternative);
        debug!(project = %self.name, alternative, "Alternative removed");
        Ok(())
    }

    /// Global priority of each alternative, in alternative order.
    ///
    /// `score(a) = Σ_c weight(c) * weight(a | c)`.
    pub fn global_vector(&self) -> Vec<(String, f64)> {
        let criteria_weights = self.criteria.priority_vector();
        let local_weights: Vec<Vec<(String, f64)>> = self
            .alternative_matrices
            .iter()
            .map(ComparisonMatrix::priority_vector)
            .collect();

        self.alternatives
            .iter()
            .enumerate()
            .map(|(k, alternative)| {
                let score = criteria_weights
                    .iter()
                    .zip(&local_weights)
                    .map(|((_, w_c), local)| w_c * local[k].1)
                    .sum();
                (alternative.clone(), score)
            })
            .collect()
    }

    /// Global priorities keyed by alternative label.
    pub fn global_scores(&self) -> HashMap<String, f64> {
        self.global_vector().into_iter().collect()
    }

    /// Highest global priority; ties go to the first declared alternative.
    pub fn best_alternative(&self) -> Option<(String, f64)> {
        first_best(&self.global_vector())
    }
}

impl fmt::Display for AhpProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.target)?;
        write!(f, "Criteria:\n{}", self.criteria)?;
        writeln!(f, "Alternatives:")?;
        for (criterion, matrix) in self.alternative_matrices() {
            write!(f, "{}:\n{}", criterion, matrix)?;
        }
        Ok(())
    }
}

/// Serialised form of an [`AhpProject`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AhpProjectSnapshot {
    pub name: String,
    pub target: String,
    pub criteria: ComparisonMatrix,
    pub alternatives: Vec<String>,
    /// One entry per criterion, in criteria order.
    pub alternative_comparisons: Vec<CriterionComparisons>,
}

/// The alternative matrix judged under one criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionComparisons {
    pub criterion: String,
    pub matrix: ComparisonMatrix,
}

impl From<AhpProject> for AhpProjectSnapshot {
    fn from(project: AhpProject) -> Self {
        let alternative_comparisons = project
            .criteria
            .items()
            .iter()
            .cloned()
            .zip(project.alternative_matrices)
            .map(|(criterion, matrix)| CriterionComparisons { criterion, matrix })
            .collect();

        Self {
            name: project.name,
            target: project.target,
            criteria: project.criteria,
            alternatives: project.alternatives,
            alternative_comparisons,
        }
    }
}

impl TryFrom<AhpProjectSnapshot> for AhpProject {
    type Error = AnalysisError;

    /// Restores a project, rejecting any per-criterion matrix that does not
    /// cover exactly the shared alternative list.
    fn try_from(snapshot: AhpProjectSnapshot) -> Result<Self, Self::Error> {
        let criteria = snapshot.criteria;

        if snapshot.alternative_comparisons.len() != criteria.size() {
            return Err(AnalysisError::construction(
                "expected one alternative matrix per criterion",
            ));
        }

        let mut alternative_matrices = Vec::with_capacity(criteria.size());
        for (criterion, entry) in criteria.items().iter().zip(snapshot.alternative_comparisons) {
            if &entry.criterion != criterion {
                return Err(AnalysisError::construction(format!(
                    "alternative matrix for '{}' found where '{}' was expected",
                    entry.criterion, criterion
                )));
            }
            if entry.matrix.items() != snapshot.alternatives.as_slice() {
                return Err(AnalysisError::construction(format!(
                    "alternatives under '{}' differ from the project alternatives",
                    criterion
                )));
            }
            alternative_matrices.push(entry.matrix);
        }

        Ok(Self {
            name: snapshot.name,
            target: snapshot.target,
            criteria,
            alternatives: snapshot.alternatives,
            alternative_matrices,
        })
    }
}
