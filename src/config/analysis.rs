//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::ahp::CONSISTENCY_THRESHOLD;

/// Tunables applied when evaluating projects
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Largest consistency ratio still accepted as consistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.consistency_threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(t));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}
