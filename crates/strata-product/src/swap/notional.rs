//! Notional amounts.

use serde::{Deserialize, Serialize};
use std::fmt;

use strata_basics::{Currency, PayReceive};

use crate::error::{ProductError, ProductResult};

/// The notional of a swap leg: a non-negative amount in a currency.
///
/// The sign of the cash flows comes from the leg's [`PayReceive`], never from
/// the notional itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotionalAmount {
    currency: Currency,
    amount: f64,
}

impl NotionalAmount {
    /// Creates a notional.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidInput` if the amount is negative or not finite.
    pub fn of(currency: Currency, amount: f64) -> ProductResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ProductError::invalid_input(format!(
                "notional must be a non-negative finite amount, got {amount}"
            )));
        }
        Ok(Self { currency, amount })
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the unsigned amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the amount signed by direction: negative when paying.
    #[must_use]
    pub fn signed_amount(&self, pay_receive: PayReceive) -> f64 {
        pay_receive.normalize(self.amount)
    }
}

impl fmt::Display for NotionalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
