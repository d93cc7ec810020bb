//! Error types for the analysis engines.

use std::fmt;
use thiserror::Error;

/// Errors raised by the comparison, hierarchy and voting engines.
///
/// Every variant is raised synchronously by the offending call and leaves
/// the receiver exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Cannot construct: {reason}")]
    Construction { reason: String },

    #[error("Unknown item: '{item}'")]
    UnknownItem { item: String },

    #[error("Invalid judgment value '{value}': {reason}")]
    InvalidValue { value: String, reason: String },

    #[error("There are already {max} items")]
    SizeExceeded { max: usize },

    #[error("At least {min} items must remain")]
    SizeBelowMinimum { min: usize },

    #[error("An expert with position '{position}' cannot hold degree '{degree}'")]
    IncompatibleCompetency { position: String, degree: String },
}

impl AnalysisError {
    /// Creates a construction error.
    pub fn construction(reason: impl Into<String>) -> Self {
        AnalysisError::Construction {
            reason: reason.into(),
        }
    }

    /// Creates an unknown item error.
    pub fn unknown_item(item: impl Into<String>) -> Self {
        AnalysisError::UnknownItem { item: item.into() }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(value: impl fmt::Display, reason: impl Into<String>) -> Self {
        AnalysisError::InvalidValue {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the stable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::Construction { .. } => ErrorCode::ConstructionFailed,
            AnalysisError::UnknownItem { .. } => ErrorCode::UnknownItem,
            AnalysisError::InvalidValue { .. } => ErrorCode::InvalidValue,
            AnalysisError::SizeExceeded { .. } => ErrorCode::SizeExceeded,
            AnalysisError::SizeBelowMinimum { .. } => ErrorCode::SizeBelowMinimum,
            AnalysisError::IncompatibleCompetency { .. } => ErrorCode::IncompatibleCompetency,
        }
    }
}

/// Stable error codes for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConstructionFailed,
    UnknownItem,
    InvalidValue,
    SizeExceeded,
    SizeBelowMinimum,
    IncompatibleCompetency,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ConstructionFailed => "CONSTRUCTION_FAILED",
            ErrorCode::UnknownItem => "UNKNOWN_ITEM",
            ErrorCode::InvalidValue => "INVALID_VALUE",
            ErrorCode::SizeExceeded => "SIZE_EXCEEDED",
            ErrorCode::SizeBelowMinimum => "SIZE_BELOW_MINIMUM",
            ErrorCode::IncompatibleCompetency => "INCOMPATIBLE_COMPETENCY",
        };
        write!(f, "{}", s)
    }
}
