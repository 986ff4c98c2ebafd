//! Error types for schedule and swap leg operations.

use strata_basics::StrataError;
use thiserror::Error;

/// A specialized Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Error types for product operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProductError {
    /// A schedule could not be generated from its definition.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the problem.
        reason: String,
    },

    /// An argument violated a construction invariant.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A builder was missing a required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// A date or convention operation failed.
    #[error("Basics error: {0}")]
    Basics(#[from] StrataError),
}

impl ProductError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProductError::invalid_schedule("end before start");
        assert_eq!(err.to_string(), "Invalid schedule: end before start");

        let err = ProductError::missing_field("notional");
        assert_eq!(err.to_string(), "Missing required field: notional");
    }

    #[test]
    fn test_from_basics() {
        let err: ProductError = StrataError::invalid_input("bad").into();
        assert!(matches!(err, ProductError::Basics(_)));
    }
}
