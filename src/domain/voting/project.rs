//! Expert Project - Budgeted voting weighted by relative competency.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::{Expert, ROUND_POINTS};
use crate::domain::ahp::{MAX_ITEMS, MIN_ITEMS};
use crate::domain::foundation::{first_best, AnalysisError};

/// A voting round over a fixed expert panel and a fixed alternative list.
///
/// Each expert distributes up to 100 points across the alternatives. Votes
/// are aggregated as `Σ_e (points / 100) * relative_weight(e)`, where the
/// relative weight is the expert's competency index over the panel total,
/// computed once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExpertProjectSnapshot", into = "ExpertProjectSnapshot")]
pub struct ExpertProject {
    name: String,
    target: String,
    alternatives: Vec<String>,
    experts: Vec<Expert>,
    /// `ledger[e][a]` is the points expert `e` currently gives alternative `a`.
    ledger: Vec<Vec<u32>>,
    relative_weights: Vec<f64>,
}

impl ExpertProject {
    /// Creates a project and freezes the relative competency weights.
    ///
    /// Every expert starts the round with a full budget.
    ///
    /// # Errors
    /// `Construction` when alternatives are outside 3..=10 or repeat, when
    /// the panel is empty, or when expert names repeat.
    pub fn new<A, S>(
        name: impl Into<String>,
        target: impl Into<String>,
        alternatives: A,
        experts: Vec<Expert>,
    ) -> Result<Self, AnalysisError>
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let alternatives: Vec<String> = alternatives.into_iter().map(Into::into).collect();
        validate_alternatives(&alternatives)?;
        validate_panel(&experts)?;

        let mut experts = experts;
        for expert in &mut experts {
            expert.budget_mut().reset();
        }

        let relative_weights = relative_weights(&experts);
        let ledger = vec![vec![0; alternatives.len()]; experts.len()];

        Ok(Self {
            name: name.into(),
            target: target.into(),
            alternatives,
            experts,
            ledger,
            relative_weights,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the alternative labels in declaration order.
    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    /// Returns the panel in declaration order.
    pub fn experts(&self) -> &[Expert] {
        &self.experts
    }

    fn expert_index(&self, expert: &str) -> Result<usize, AnalysisError> {
        self.experts
            .iter()
            .position(|e| e.name() == expert)
            .ok_or_else(|| AnalysisError::unknown_item(expert))
    }

    fn alternative_index(&self, alternative: &str) -> Result<usize, AnalysisError> {
        self.alternatives
            .iter()
            .position(|a| a == alternative)
            .ok_or_else(|| AnalysisError::unknown_item(alternative))
    }

    /// Records `rate` points from `expert` for `alternative`.
    ///
    /// The recorded value replaces the expert's previous entry for that
    /// alternative, and the replaced points go back to the budget before the
    /// new rate is spent. If the budget is exhausted but the ledger shows
    /// fewer than 100 points, the budget is first refilled to the difference.
    /// A rate above the available budget records whatever is available.
    ///
    /// Returns the points actually recorded.
    ///
    /// # Errors
    /// `UnknownItem` when the expert or the alternative is absent.
    pub fn vote(&mut self, expert: &str, alternative: &str, rate: u32) -> Result<u32, AnalysisError> {
        let e = self.expert_index(expert)?;
        let a = self.alternative_index(alternative)?;

        let previous = self.ledger[e][a];
        let recorded_total = self.total_recorded_at(e);
        let budget = self.experts[e].budget_mut();
        if budget.is_exhausted() && recorded_total < ROUND_POINTS {
            budget.replenish(recorded_total);
            debug!(expert, remaining = budget.remaining(), "Budget replenished");
        }

        budget.refund(previous);
        let recorded = budget.spend(rate);
        self.ledger[e][a] = recorded;

        if recorded < rate {
            debug!(expert, alternative, requested = rate, recorded, "Vote clamped to budget");
        } else {
            debug!(expert, alternative, recorded, "Vote recorded");
        }
        Ok(recorded)
    }

    fn total_recorded_at(&self, expert: usize) -> u32 {
        self.ledger[expert].iter().sum()
    }

    /// Points `expert` currently gives `alternative`.
    pub fn votes(&self, expert: &str, alternative: &str) -> Result<u32, AnalysisError> {
        let e = self.expert_index(expert)?;
        let a = self.alternative_index(alternative)?;
        Ok(self.ledger[e][a])
    }

    /// Recorded points as a fraction of the round (`points / 100`).
    pub fn normalized_vote(&self, expert: &str, alternative: &str) -> Result<f64, AnalysisError> {
        Ok(f64::from(self.votes(expert, alternative)?) / f64::from(ROUND_POINTS))
    }

    /// Sum of the points `expert` has recorded across all alternatives.
    pub fn total_recorded(&self, expert: &str) -> Result<u32, AnalysisError> {
        Ok(self.total_recorded_at(self.expert_index(expert)?))
    }

    /// Points `expert` can still spend before the next replenish.
    pub fn remaining_budget(&self, expert: &str) -> Result<u32, AnalysisError> {
        let e = self.expert_index(expert)?;
        Ok(self.experts[e].remaining_budget())
    }

    /// Competency index of `expert` over the panel total.
    pub fn relative_weight(&self, expert: &str) -> Result<f64, AnalysisError> {
        Ok(self.relative_weights[self.expert_index(expert)?])
    }

    /// Relative weights in panel order.
    pub fn relative_weights(&self) -> &[f64] {
        &self.relative_weights
    }

    /// Recorded totals in panel order.
    pub fn recorded_totals(&self) -> Vec<u32> {
        self.ledger.iter().map(|row| row.iter().sum()).collect()
    }

    /// Aggregate score per alternative, in alternative order.
    pub fn result(&self) -> Vec<(String, f64)> {
        self.alternatives
            .iter()
            .enumerate()
            .map(|(a, alternative)| {
                let score = self
                    .ledger
                    .iter()
                    .zip(&self.relative_weights)
                    .map(|(row, weight)| f64::from(row[a]) / f64::from(ROUND_POINTS) * weight)
                    .sum();
                (alternative.clone(), score)
            })
            .collect()
    }

    /// Aggregate scores keyed by alternative label.
    pub fn result_map(&self) -> HashMap<String, f64> {
        self.result().into_iter().collect()
    }

    /// Highest aggregate score; ties go to the first declared alternative.
    pub fn best_alternative(&self) -> Option<(String, f64)> {
        first_best(&self.result())
    }

    /// Starts a new round: every vote back to 0, every budget back to 100.
    pub fn clear(&mut self) {
        for row in &mut self.ledger {
            row.iter_mut().for_each(|points| *points = 0);
        }
        for expert in &mut self.experts {
            expert.budget_mut().reset();
        }
        debug!(project = %self.name, "Voting round cleared");
    }
}

fn validate_alternatives(alternatives: &[String]) -> Result<(), AnalysisError> {
    if alternatives.len() < MIN_ITEMS || alternatives.len() > MAX_ITEMS {
        return Err(AnalysisError::construction(format!(
            "there should be between {} and {} alternatives, given {}",
            MIN_ITEMS,
            MAX_ITEMS,
            alternatives.len()
        )));
    }
    let mut seen = HashSet::new();
    for alternative in alternatives {
        if !seen.insert(alternative.as_str()) {
            return Err(AnalysisError::construction(format!(
                "alternative '{}' appears more than once",
                alternative
            )));
        }
    }
    Ok(())
}

fn validate_panel(experts: &[Expert]) -> Result<(), AnalysisError> {
    if experts.is_empty() {
        return Err(AnalysisError::construction("at least one expert is required"));
    }
    let mut seen = HashSet::new();
    for expert in experts {
        if !seen.insert(expert.name()) {
            return Err(AnalysisError::construction(format!(
                "expert '{}' appears more than once",
                expert.name()
            )));
        }
    }
    Ok(())
}

fn relative_weights(experts: &[Expert]) -> Vec<f64> {
    let total: f64 = experts.iter().map(Expert::competency_index).sum();
    experts
        .iter()
        .map(|e| e.competency_index() / total)
        .collect()
}

/// One non-zero ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    pub expert: String,
    pub alternative: String,
    pub points: u32,
}

/// Serialised form of an [`ExpertProject`].
///
/// Relative weights are not stored: they follow from the stored indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertProjectSnapshot {
    pub name: String,
    pub target: String,
    pub alternatives: Vec<String>,
    pub experts: Vec<Expert>,
    #[serde(default)]
    pub votes: Vec<VoteRecord>,
}

impl From<ExpertProject> for ExpertProjectSnapshot {
    fn from(project: ExpertProject) -> Self {
        let mut votes = Vec::new();
        for (expert, row) in project.experts.iter().zip(&project.ledger) {
            for (alternative, points) in project.alternatives.iter().zip(row) {
                if *points > 0 {
                    votes.push(VoteRecord {
                        expert: expert.name().to_string(),
                        alternative: alternative.clone(),
                        points: *points,
                    });
                }
            }
        }

        Self {
            name: project.name,
            target: project.target,
            alternatives: project.alternatives,
            experts: project.experts,
            votes,
        }
    }
}

impl TryFrom<ExpertProjectSnapshot> for ExpertProject {
    type Error = AnalysisError;

    /// Restores a project, keeping each expert's stored budget.
    fn try_from(snapshot: ExpertProjectSnapshot) -> Result<Self, Self::Error> {
        validate_alternatives(&snapshot.alternatives)?;
        validate_panel(&snapshot.experts)?;

        let relative_weights = relative_weights(&snapshot.experts);
        let mut project = Self {
            name: snapshot.name,
            target: snapshot.target,
            ledger: vec![vec![0; snapshot.alternatives.len()]; snapshot.experts.len()],
            alternatives: snapshot.alternatives,
            experts: snapshot.experts,
            relative_weights,
        };

        let mut seen = HashSet::new();
        for vote in snapshot.votes {
            let e = project.expert_index(&vote.expert)?;
            let a = project.alternative_index(&vote.alternative)?;
            if vote.points > ROUND_POINTS {
                return Err(AnalysisError::construction(format!(
                    "vote from '{}' for '{}' exceeds {} points",
                    vote.expert, vote.alternative, ROUND_POINTS
                )));
            }
            if !seen.insert((e, a)) {
                return Err(AnalysisError::construction(format!(
                    "duplicate vote from '{}' for '{}'",
                    vote.expert, vote.alternative
                )));
            }
            project.ledger[e][a] = vote.points;
        }

        for (e, expert) in project.experts.iter().enumerate() {
            let recorded: u64 = project.ledger[e].iter().map(|&p| u64::from(p)).sum();
            if recorded + u64::from(expert.remaining_budget()) > u64::from(ROUND_POINTS) {
                return Err(AnalysisError::construction(format!(
                    "expert '{}' holds more than {} points",
                    expert.name(),
                    ROUND_POINTS
                )));
            }
        }

        Ok(project)
    }
}
