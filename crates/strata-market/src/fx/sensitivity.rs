//! Point and parameter sensitivities of FX forward rates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use strata_basics::{Currency, Date};

use super::pair::CurrencyPair;
use crate::curve::CurveName;
use crate::error::{MarketError, MarketResult};

/// Sensitivity to the FX forward rate of a currency pair on a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FxForwardSensitivity {
    /// The pair.
    pub currency_pair: CurrencyPair,
    /// Base currency in which the forward rate is expressed.
    pub reference_currency: Currency,
    /// Date of the forward.
    pub reference_date: Date,
    /// Currency of the sensitivity amount.
    pub currency: Currency,
    /// Sensitivity amount.
    pub sensitivity: f64,
}

impl FxForwardSensitivity {
    /// Creates a sensitivity in the counter currency of `reference_currency`.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidInput` if `reference_currency` is not in the pair.
    pub fn of(
        currency_pair: CurrencyPair,
        reference_currency: Currency,
        reference_date: Date,
        sensitivity: f64,
    ) -> MarketResult<Self> {
        let currency = currency_pair.other(reference_currency).ok_or_else(|| {
            MarketError::invalid_input(format!(
                "Reference currency {reference_currency} must be one of {currency_pair}"
            ))
        })?;
        Ok(Self {
            currency_pair,
            reference_currency,
            reference_date,
            currency,
            sensitivity,
        })
    }

    /// Returns the currency the forward rate is quoted in.
    #[must_use]
    pub fn reference_counter_currency(&self) -> Currency {
        self.currency_pair
            .other(self.reference_currency)
            .unwrap_or(self.currency_pair.counter)
    }

    /// Returns a copy with the sensitivity scaled.
    #[must_use]
    pub fn multiplied_by(&self, factor: f64) -> Self {
        Self {
            sensitivity: self.sensitivity * factor,
            ..*self
        }
    }
}

/// Sensitivity of a value to each parameter of one curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyParameterSensitivity {
    /// The curve.
    pub curve_name: CurveName,
    /// Currency of the sensitivity amounts.
    pub currency: Currency,
    /// One amount per curve parameter.
    pub sensitivity: Vec<f64>,
}

impl CurrencyParameterSensitivity {
    /// Returns the sum of the amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.sensitivity.iter().sum()
    }
}

/// Parameter sensitivities to several curves.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyParameterSensitivities(Vec<CurrencyParameterSensitivity>);

impl CurrencyParameterSensitivities {
    /// Creates the collection.
    #[must_use]
    pub fn of(sensitivities: Vec<CurrencyParameterSensitivity>) -> Self {
        Self(sensitivities)
    }

    /// Returns the sensitivity to the named curve.
    #[must_use]
    pub fn find(&self, curve_name: &CurveName) -> Option<&CurrencyParameterSensitivity> {
        self.0.iter().find(|s| &s.curve_name == curve_name)
    }

    /// Returns every entry.
    #[must_use]
    pub fn sensitivities(&self) -> &[CurrencyParameterSensitivity] {
        &self.0
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Amounts in several currencies, at most one per currency.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiCurrencyAmount(BTreeMap<Currency, f64>);

impl MultiCurrencyAmount {
    /// Creates an amount from currency/amount pairs, summing repeated currencies.
    pub fn of(amounts: impl IntoIterator<Item = (Currency, f64)>) -> Self {
        amounts
            .into_iter()
            .fold(Self::default(), |acc, (ccy, amount)| acc.plus(ccy, amount))
    }

    /// Returns a copy with `amount` added in `currency`.
    #[must_use]
    pub fn plus(mut self, currency: Currency, amount: f64) -> Self {
        *self.0.entry(currency).or_insert(0.0) += amount;
        self
    }

    /// Returns the amount in `currency`, zero if absent.
    #[must_use]
    pub fn amount(&self, currency: Currency) -> f64 {
        self.0.get(&currency).copied().unwrap_or(0.0)
    }

    /// Returns the currencies in order.
    pub fn currencies(&self) -> impl Iterator<Item = Currency> + '_ {
        self.0.keys().copied()
    }

    /// Returns the number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no currency is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MultiCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(c, a)| format!("{c} {a}")).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
