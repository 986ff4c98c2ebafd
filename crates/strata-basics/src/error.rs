//! Error types for the basics layer.
//!
//! Every constructor that enforces an invariant reports failures through
//! [`StrataError`], naming the offending field or value.

use thiserror::Error;

/// A specialized Result type for basics operations.
pub type StrataResult<T> = Result<T, StrataError>;

/// The main error type for basics operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrataError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// An argument violated a construction or mutation invariant.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A textual representation could not be parsed.
    #[error("Unable to parse {kind} from '{input}'")]
    Parse {
        /// What was being parsed.
        kind: &'static str,
        /// The rejected text.
        input: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    CalendarError {
        /// Description of the error.
        reason: String,
    },
}

impl StrataError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(kind: &'static str, input: impl Into<String>) -> Self {
        Self::Parse {
            kind,
            input: input.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar_error(reason: impl Into<String>) -> Self {
        Self::CalendarError {
            reason: reason.into(),
        }
    }
}
