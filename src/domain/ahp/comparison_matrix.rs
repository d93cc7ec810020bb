//! Comparison Matrix - Skew-reciprocal pairwise judgments over a named item set.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::debug;

use super::consistency;
use crate::domain::foundation::{AnalysisError, Judgment, JudgmentInput};

/// Fewest items a comparison matrix may hold.
pub const MIN_ITEMS: usize = 3;

/// Most items a comparison matrix may hold.
pub const MAX_ITEMS: usize = 10;

/// A complete table of pairwise judgments.
///
/// Invariants, holding after every public call:
/// - `MIN_ITEMS <= size <= MAX_ITEMS`, labels unique;
/// - `get(i, i) == 1`;
/// - `get(i, j) * get(j, i) == 1` exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatrixSnapshot", into = "MatrixSnapshot")]
pub struct ComparisonMatrix {
    items: Vec<String>,
    /// Row-major, `judgments[i][j]` is item `i` compared with item `j`.
    judgments: Vec<Vec<Judgment>>,
}

impl ComparisonMatrix {
    /// Creates an all-neutral matrix over `items`.
    ///
    /// # Errors
    /// `Construction` when the item count is outside 3..=10 or labels repeat.
    pub fn new<I, S>(items: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();

        if items.len() < MIN_ITEMS || items.len() > MAX_ITEMS {
            return Err(AnalysisError::construction(format!(
                "there should be between {} and {} items, given {}",
                MIN_ITEMS,
                MAX_ITEMS,
                items.len()
            )));
        }

        {
            let mut seen = HashSet::new();
            for item in &items {
                if !seen.insert(item.as_str()) {
                    return Err(AnalysisError::construction(format!(
                        "item '{}' appears more than once",
                        item
                    )));
                }
            }
        }

        let size = items.len();
        Ok(Self {
            items,
            judgments: vec![vec![Judgment::ONE; size]; size],
        })
    }

    /// Returns the item labels in declaration order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Returns the number of items.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if `item` is one of the labels.
    pub fn contains(&self, item: &str) -> bool {
        self.index_of(item).is_some()
    }

    /// Returns the raw row-major judgment table.
    pub fn table(&self) -> &[Vec<Judgment>] {
        &self.judgments
    }

    fn index_of(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    fn require_index(&self, item: &str) -> Result<usize, AnalysisError> {
        self.index_of(item)
            .ok_or_else(|| AnalysisError::unknown_item(item))
    }

    /// Records how much more important `a` is than `b`.
    ///
    /// The value is coerced to an exact judgment first. Comparing an item
    /// with itself always stores 1, whatever was supplied.
    ///
    /// # Errors
    /// - `InvalidValue` when the value is not a ratio of integers in 1..=9
    /// - `UnknownItem` when either label is absent
    pub fn set(
        &mut self,
        a: &str,
        b: &str,
        value: impl Into<JudgmentInput>,
    ) -> Result<(), AnalysisError> {
        let judgment = Judgment::try_from(value.into())?;
        let i = self.require_index(a)?;
        let j = self.require_index(b)?;

        if i == j {
            self.judgments[i][i] = Judgment::ONE;
            return Ok(());
        }

        self.judgments[i][j] = judgment;
        self.judgments[j][i] = judgment.reciprocal();
        debug!(a, b, value = %judgment, "Judgment recorded");
        Ok(())
    }

    /// Returns the judgment of `a` against `b`.
    pub fn get(&self, a: &str, b: &str) -> Result<Judgment, AnalysisError> {
        let i = self.require_index(a)?;
        let j = self.require_index(b)?;
        Ok(self.judgments[i][j])
    }

    /// Geometric mean of every row, unnormalised.
    ///
    /// Row products are taken exactly: with at most ten entries of at most 9,
    /// numerator and denominator products fit in a u64.
    fn row_geometric_means(&self) -> Vec<f64> {
        let exponent = 1.0 / self.size() as f64;
        self.judgments
            .iter()
            .map(|row| {
                let (num, den) = row.iter().fold((1_u64, 1_u64), |(n, d), j| {
                    (n * u64::from(j.numerator()), d * u64::from(j.denominator()))
                });
                (num as f64 / den as f64).powf(exponent)
            })
            .collect()
    }

    /// Normalised priority weights in item order.
    ///
    /// Weights are the row geometric means divided by their sum, so they add
    /// up to 1 within floating tolerance.
    pub fn priority_vector(&self) -> Vec<(String, f64)> {
        let means = self.row_geometric_means();
        let total: f64 = means.iter().sum();

        self.items
            .iter()
            .cloned()
            .zip(means.into_iter().map(|m| m / total))
            .collect()
    }

    /// Normalised priority weights keyed by item label.
    pub fn normalized_vector(&self) -> HashMap<String, f64> {
        self.priority_vector().into_iter().collect()
    }

    fn column_sums(&self) -> Vec<f64> {
        (0..self.size())
            .map(|col| self.judgments.iter().map(|row| row[col].value()).sum())
            .collect()
    }

    /// Principal eigenvalue estimate: `Σ weight_i * colsum_i`.
    pub fn lambda_max(&self) -> f64 {
        self.priority_vector()
            .iter()
            .zip(self.column_sums())
            .map(|((_, weight), colsum)| weight * colsum)
            .sum()
    }

    /// Consistency ratio truncated to two decimals; 0 for a neutral matrix.
    pub fn consistency_ratio(&self) -> f64 {
        consistency::consistency_ratio(self.lambda_max(), self.size())
    }

    /// Returns true when the consistency ratio does not exceed `threshold`.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.consistency_ratio() <= threshold
    }

    /// Appends `item` with neutral judgments against every other item.
    ///
    /// # Errors
    /// - `SizeExceeded` when the matrix already holds 10 items
    /// - `Construction` when the label is already present
    pub fn add(&mut self, item: impl Into<String>) -> Result<(), AnalysisError> {
        let item = item.into();
        self.check_can_add(&item)?;

        for row in &mut self.judgments {
            row.push(Judgment::ONE);
        }
        debug!(item = %item, size = self.size() + 1, "Item added");
        self.items.push(item);
        self.judgments.push(vec![Judgment::ONE; self.items.len()]);
        Ok(())
    }

    /// Removes `item` and every judgment that references it.
    ///
    /// # Errors
    /// - `SizeBelowMinimum` when only 3 items remain
    /// - `UnknownItem` when the label is absent
    pub fn remove(&mut self, item: &str) -> Result<(), AnalysisError> {
        self.check_can_remove(item)?;
        let index = self.require_index(item)?;

        self.items.remove(index);
        self.judgments.remove(index);
        for row in &mut self.judgments {
            row.remove(index);
        }
        debug!(item, size = self.size(), "Item removed");
        Ok(())
    }

    /// Validates that another add would succeed, without mutating.
    pub(crate) fn check_can_add(&self, item: &str) -> Result<(), AnalysisError> {
        if self.size() >= MAX_ITEMS {
            return Err(AnalysisError::SizeExceeded { max: MAX_ITEMS });
        }
        if self.contains(item) {
            return Err(AnalysisError::construction(format!(
                "item '{}' is already present",
                item
            )));
        }
        Ok(())
    }

    /// Validates that a remove would succeed, without mutating.
    pub(crate) fn check_can_remove(&self, item: &str) -> Result<(), AnalysisError> {
        if self.size() <= MIN_ITEMS {
            return Err(AnalysisError::SizeBelowMinimum { min: MIN_ITEMS });
        }
        self.require_index(item).map(|_| ())
    }
}

impl fmt::Display for ComparisonMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison matrix:")?;
        for row in &self.judgments {
            for judgment in row {
                write!(f, "[{}]", judgment)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Serialised form: labels plus the raw row-major table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    pub items: Vec<String>,
    pub judgments: Vec<Vec<Judgment>>,
}

impl From<ComparisonMatrix> for MatrixSnapshot {
    fn from(matrix: ComparisonMatrix) -> Self {
        Self {
            items: matrix.items,
            judgments: matrix.judgments,
        }
    }
}

impl TryFrom<MatrixSnapshot> for ComparisonMatrix {
    type Error = AnalysisError;

    /// Restores a matrix, re-checking every invariant of the table.
    fn try_from(snapshot: MatrixSnapshot) -> Result<Self, Self::Error> {
        let mut matrix = ComparisonMatrix::new(snapshot.items)?;
        let size = matrix.size();

        if snapshot.judgments.len() != size || snapshot.judgments.iter().any(|r| r.len() != size) {
            return Err(AnalysisError::construction(format!(
                "judgment table must be {}x{}",
                size, size
            )));
        }

        for i in 0..size {
            if !snapshot.judgments[i][i].is_one() {
                return Err(AnalysisError::construction(format!(
                    "diagonal entry for '{}' must be 1",
                    matrix.items[i]
                )));
            }
            for j in (i + 1)..size {
                if snapshot.judgments[j][i] != snapshot.judgments[i][j].reciprocal() {
                    return Err(AnalysisError::construction(format!(
                        "judgments '{}'/'{}' are not reciprocal",
                        matrix.items[i], matrix.items[j]
                    )));
                }
            }
        }

        matrix.judgments = snapshot.judgments;
        Ok(matrix)
    }
}
