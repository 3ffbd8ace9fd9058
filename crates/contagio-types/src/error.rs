//! Error types for contagio.

use thiserror::Error;

use crate::PeriodTypeParseError;

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Errors that can occur while validating an estimation request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    /// The requested period type is not one of the recognized values.
    #[error(transparent)]
    InvalidPeriodType(#[from] PeriodTypeParseError),
}

impl EstimatorError {
    /// Returns the rejected input value, when the error carries one.
    #[must_use]
    pub fn rejected_value(&self) -> Option<&str> {
        match self {
            Self::InvalidPeriodType(err) => Some(err.value()),
        }
    }
}
