//! Error types for curve and market data operations.
//!
//! Construction and mutation invariants (node counts, ordering, list lengths)
//! are reported as [`MarketError`] values. Failures raised by the math and
//! basics layers are wrapped so callers deal with a single error type.

use strata_basics::StrataError;
use strata_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve and market data operations.
pub type MarketResult<T> = Result<T, MarketError>;

/// Error types for curve and market data operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    /// An argument violated a construction or mutation invariant.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Not enough nodes to define a curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Node x-values are not strictly increasing.
    #[error("Non-monotonic nodes at index {index}: {prev:.4} >= {current:.4}")]
    NonMonotonicNodes {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous x-value.
        prev: f64,
        /// Current x-value.
        current: f64,
    },

    /// A parameter index is outside the valid range.
    #[error("Index {index} out of bounds for {len} parameters")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of parameters.
        len: usize,
    },

    /// Market data was requested that the snapshot does not hold.
    #[error("Market data not found: {id}")]
    MissingData {
        /// Identifier of the missing data.
        id: String,
    },

    /// Curve configuration could not be read or written.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration failure.
        reason: String,
    },

    /// The provider does not implement the operation.
    #[error("Operation not supported: {operation}")]
    Unsupported {
        /// Name of the operation.
        operation: &'static str,
    },

    /// Interpolation or extrapolation failed.
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// A date or convention operation failed.
    #[error("Basics error: {0}")]
    Basics(#[from] StrataError),
}

impl MarketError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a non-monotonic nodes error.
    #[must_use]
    pub fn non_monotonic_nodes(index: usize, prev: f64, current: f64) -> Self {
        Self::NonMonotonicNodes {
            index,
            prev,
            current,
        }
    }

    /// Creates an index out of bounds error.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::IndexOutOfBounds { index, len }
    }

    /// Creates a missing data error.
    #[must_use]
    pub fn missing_data(id: impl ToString) -> Self {
        Self::MissingData { id: id.to_string() }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates an unsupported operation error.
    #[must_use]
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    /// Returns true if the error reports an invariant violation in the caller's input.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::InvalidInput { .. }
            | Self::InsufficientPoints { .. }
            | Self::NonMonotonicNodes { .. }
            | Self::IndexOutOfBounds { .. } => true,
            Self::Math(MathError::InvalidInput { .. } | MathError::InsufficientData { .. }) => true,
            Self::Basics(StrataError::InvalidInput { .. }) => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MarketError::non_monotonic_nodes(2, 3.0, 2.5);
        let msg = format!("{}", err);
        assert!(msg.contains("Non-monotonic"));
        assert!(msg.contains("index 2"));
    }

    #[test]
    fn test_invalid_input_kinds() {
        assert!(MarketError::insufficient_points(2, 1).is_invalid_input());
        assert!(MarketError::index_out_of_bounds(4, 3).is_invalid_input());
        assert!(MarketError::from(MathError::invalid_input("bad")).is_invalid_input());
        assert!(!MarketError::missing_data("USD-Discount").is_invalid_input());
    }

    #[test]
    fn test_missing_data_names_id() {
        let err = MarketError::missing_data("FxRate[USD/GBP]");
        assert_eq!(err.to_string(), "Market data not found: FxRate[USD/GBP]");
    }
}
