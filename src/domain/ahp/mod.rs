//! AHP Module - Hierarchical pairwise-comparison weighting.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Skew-reciprocal judgment table, priority vector,
//!   principal eigenvalue estimate and consistency ratio
//! - `AhpProject` - Criteria matrix plus one alternative matrix per criterion
//! - `AhpReport` - Per-matrix summaries and the global ranking
//!
//! Priorities use the row geometric-mean approximation of the principal
//! eigenvector; there is no iterative eigenvalue solving.

mod comparison_matrix;
mod consistency;
mod project;
mod report;

pub use comparison_matrix::{ComparisonMatrix, MatrixSnapshot, MAX_ITEMS, MIN_ITEMS};
pub use consistency::{consistency_ratio, random_index, CONSISTENCY_THRESHOLD, RANDOM_INDEX};
pub use project::{AhpProject, AhpProjectSnapshot, CriterionComparisons};
pub use report::{AhpReport, CriterionSummary, MatrixSummary};
