//! Vote budget - The rating points an expert still has to spend this round.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::AnalysisError;

/// Points every expert distributes per voting round.
pub const ROUND_POINTS: u32 = 100;

/// Remaining rating points, always in `0..=100`.
///
/// Starts full, only decreases through [`VoteBudget::spend`], and is refilled
/// by [`VoteBudget::refund`] when a vote is replaced, by
/// [`VoteBudget::replenish`], or by a round reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct VoteBudget(u32);

impl VoteBudget {
    /// A budget with nothing left.
    pub const EMPTY: Self = Self(0);

    /// A fresh budget for a new round.
    pub const FULL: Self = Self(ROUND_POINTS);

    /// Returns the points remaining.
    pub fn remaining(&self) -> u32 {
        self.0
    }

    /// Returns true when nothing is left to spend.
    pub fn is_exhausted(&self) -> bool {
        self.0 == 0
    }

    /// Spends up to `rate` points and returns what was actually spent.
    ///
    /// A request above the remaining budget spends everything left.
    pub(crate) fn spend(&mut self, rate: u32) -> u32 {
        let spent = rate.min(self.0);
        self.0 -= spent;
        spent
    }

    /// Returns points freed by a replaced ledger entry, capped at a full round.
    pub(crate) fn refund(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points).min(ROUND_POINTS);
    }

    /// Refills an exhausted budget up to what the ledger still allows.
    pub(crate) fn replenish(&mut self, recorded_total: u32) {
        self.0 = ROUND_POINTS.saturating_sub(recorded_total);
    }

    /// Starts a new round.
    pub(crate) fn reset(&mut self) {
        *self = Self::FULL;
    }
}

impl Default for VoteBudget {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u32> for VoteBudget {
    type Error = AnalysisError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > ROUND_POINTS {
            return Err(AnalysisError::invalid_value(
                value,
                format!("budget must be between 0 and {}", ROUND_POINTS),
            ));
        }
        Ok(Self(value))
    }
}

impl From<VoteBudget> for u32 {
    fn from(value: VoteBudget) -> Self {
        value.0
    }
}

impl fmt::Display for VoteBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, ROUND_POINTS)
    }
}
