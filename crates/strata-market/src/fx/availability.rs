//! Results of operations a provider may not implement.

use crate::error::{MarketError, MarketResult};

/// The result of an operation that a provider may decline to support.
///
/// ```rust
/// use strata_market::fx::Availability;
///
/// let missing: Availability<f64> = Availability::not_available("rate_fx_spot_sensitivity");
/// assert!(!missing.is_available());
/// assert!(missing.into_result().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Availability<T> {
    /// The operation is supported and produced a value.
    Available(T),
    /// The provider does not implement the operation.
    NotAvailable {
        /// Name of the operation.
        operation: &'static str,
    },
}

impl<T> Availability<T> {
    /// Creates an unavailable result for the named operation.
    #[must_use]
    pub fn not_available(operation: &'static str) -> Self {
        Availability::NotAvailable { operation }
    }

    /// Returns true if a value is present.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available(_))
    }

    /// Returns the value, if any.
    #[must_use]
    pub fn available(self) -> Option<T> {
        match self {
            Availability::Available(value) => Some(value),
            Availability::NotAvailable { .. } => None,
        }
    }

    /// Maps the value, keeping an unavailable result as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Availability<U> {
        match self {
            Availability::Available(value) => Availability::Available(f(value)),
            Availability::NotAvailable { operation } => Availability::NotAvailable { operation },
        }
    }

    /// Converts to a result, reporting an unavailable operation as `MarketError::Unsupported`.
    pub fn into_result(self) -> MarketResult<T> {
        match self {
            Availability::Available(value) => Ok(value),
            Availability::NotAvailable { operation } => Err(MarketError::unsupported(operation)),
        }
    }
}
