//! Currency pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strata_basics::Currency;

use crate::error::MarketError;

/// An ordered pair of currencies.
///
/// For GBP/USD = 1.6, base=GBP, counter=USD, meaning 1 GBP = 1.6 USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Base currency
    pub base: Currency,
    /// Counter currency
    pub counter: Currency,
}

impl CurrencyPair {
    /// Creates a new currency pair.
    #[must_use]
    pub fn new(base: Currency, counter: Currency) -> Self {
        Self { base, counter }
    }

    /// Returns the inverse pair.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self::new(self.counter, self.base)
    }

    /// Returns true if either currency of the pair is `currency`.
    #[must_use]
    pub fn contains(&self, currency: Currency) -> bool {
        self.base == currency || self.counter == currency
    }

    /// Returns the other currency of the pair.
    #[must_use]
    pub fn other(&self, currency: Currency) -> Option<Currency> {
        if currency == self.base {
            Some(self.counter)
        } else if currency == self.counter {
            Some(self.base)
        } else {
            None
        }
    }

    /// Returns true if both currencies are the same.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.base == self.counter
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base.code(), self.counter.code())
    }
}

impl FromStr for CurrencyPair {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (base, counter) = s
            .split_once('/')
            .ok_or_else(|| MarketError::invalid_input(format!("Invalid currency pair: {s}")))?;
        Ok(Self::new(base.parse()?, counter.parse()?))
    }
}
