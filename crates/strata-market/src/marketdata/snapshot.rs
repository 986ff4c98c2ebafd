//! An in-memory snapshot of the market on a valuation date.

use std::collections::HashMap;
use strata_basics::{Currency, Date};

use super::ids::{MarketDataId, ObservableId};
use super::rules::MarketDataRules;
use super::timeseries::DateDoubleTimeSeries;
use crate::curve::InterpolatedNodalCurve;
use crate::error::{MarketError, MarketResult};

static EMPTY_SERIES: DateDoubleTimeSeries = DateDoubleTimeSeries::empty();

/// A current market value.
#[derive(Debug, Clone, PartialEq)]
pub enum MarketDataValue {
    /// A curve.
    Curve(InterpolatedNodalCurve),
    /// A single number such as an FX rate or a quote.
    Scalar(f64),
}

impl MarketDataValue {
    /// Returns the curve, if this value is one.
    #[must_use]
    pub fn as_curve(&self) -> Option<&InterpolatedNodalCurve> {
        match self {
            MarketDataValue::Curve(curve) => Some(curve),
            MarketDataValue::Scalar(_) => None,
        }
    }

    /// Returns the number, if this value is one.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            MarketDataValue::Scalar(value) => Some(*value),
            MarketDataValue::Curve(_) => None,
        }
    }
}

impl From<InterpolatedNodalCurve> for MarketDataValue {
    fn from(curve: InterpolatedNodalCurve) -> Self {
        MarketDataValue::Curve(curve)
    }
}

impl From<f64> for MarketDataValue {
    fn from(value: f64) -> Self {
        MarketDataValue::Scalar(value)
    }
}

/// Market data as of a valuation date: historic time series, current values
/// and the rules choosing curve groups for calculation targets.
///
/// # Example
///
/// ```rust
/// use strata_basics::{Currency, Date};
/// use strata_market::marketdata::{MarketDataId, MarketDataSnapshot};
///
/// let snapshot = MarketDataSnapshot::builder(Date::from_ymd(2014, 1, 22).unwrap())
///     .add_fx_rate(Currency::GBP, Currency::USD, 1.6)
///     .build()
///     .unwrap();
///
/// assert!(snapshot.contains_value(&MarketDataId::fx_rate(Currency::GBP, Currency::USD)));
/// assert_eq!(snapshot.fx_rate(Currency::USD, Currency::GBP).unwrap(), 0.625);
/// ```
#[derive(Debug, Clone)]
pub struct MarketDataSnapshot {
    valuation_date: Date,
    time_series: HashMap<ObservableId, DateDoubleTimeSeries>,
    values: HashMap<MarketDataId, MarketDataValue>,
    rules: MarketDataRules,
}

impl MarketDataSnapshot {
    /// Returns a builder for a snapshot on the valuation date.
    #[must_use]
    pub fn builder(valuation_date: Date) -> MarketDataSnapshotBuilder {
        MarketDataSnapshotBuilder {
            valuation_date,
            time_series: HashMap::new(),
            values: HashMap::new(),
            rules: MarketDataRules::empty(),
        }
    }

    /// Returns the valuation date.
    #[must_use]
    pub fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    /// Returns the rules.
    #[must_use]
    pub fn rules(&self) -> &MarketDataRules {
        &self.rules
    }

    /// Returns true if the snapshot holds a time series for the identifier.
    #[must_use]
    pub fn contains_time_series(&self, id: &ObservableId) -> bool {
        self.time_series.contains_key(id)
    }

    /// Returns true if the snapshot holds a value for the identifier.
    #[must_use]
    pub fn contains_value(&self, id: &MarketDataId) -> bool {
        self.values.contains_key(id)
    }

    /// Returns the time series for the identifier, empty if there is none.
    #[must_use]
    pub fn time_series(&self, id: &ObservableId) -> &DateDoubleTimeSeries {
        self.time_series.get(id).unwrap_or(&EMPTY_SERIES)
    }

    /// Returns the identifiers of every time series.
    pub fn time_series_ids(&self) -> impl Iterator<Item = &ObservableId> {
        self.time_series.keys()
    }

    /// Returns the identifiers of every value.
    pub fn value_ids(&self) -> impl Iterator<Item = &MarketDataId> {
        self.values.keys()
    }

    /// Returns the value for the identifier.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::MissingData` if there is no such value.
    pub fn value(&self, id: &MarketDataId) -> MarketResult<&MarketDataValue> {
        self.values
            .get(id)
            .ok_or_else(|| MarketError::missing_data(id))
    }

    /// Returns the curve for the identifier.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::MissingData` if there is no such value, or
    /// `MarketError::InvalidInput` if the value is not a curve.
    pub fn curve(&self, id: &MarketDataId) -> MarketResult<&InterpolatedNodalCurve> {
        self.value(id)?
            .as_curve()
            .ok_or_else(|| MarketError::invalid_input(format!("{id} is not a curve")))
    }

    /// Returns the spot rate in units of `counter` per unit of `base`.
    ///
    /// The inverse quote is used when only the opposite pair is held.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::MissingData` if neither quote is held.
    pub fn fx_rate(&self, base: Currency, counter: Currency) -> MarketResult<f64> {
        if base == counter {
            return Ok(1.0);
        }
        let scalar = |id: &MarketDataId| self.values.get(id).and_then(MarketDataValue::as_scalar);
        let direct = MarketDataId::fx_rate(base, counter);
        if let Some(rate) = scalar(&direct) {
            return Ok(rate);
        }
        scalar(&MarketDataId::fx_rate(counter, base))
            .map(|rate| 1.0 / rate)
            .ok_or_else(|| MarketError::missing_data(direct))
    }

    /// Returns the discount curve the rules assign to a target type.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::MissingData` if no rule applies or the curve is absent.
    pub fn discount_curve(
        &self,
        currency: Currency,
        target_type: &str,
    ) -> MarketResult<&InterpolatedNodalCurve> {
        let mappings = self.rules.mappings_for(target_type).ok_or_else(|| {
            MarketError::missing_data(format!("market data rule for target type {target_type}"))
        })?;
        self.curve(&MarketDataId::discount_curve(
            currency,
            mappings.curve_group.clone(),
        ))
    }
}

/// Builder for [`MarketDataSnapshot`].
#[derive(Debug, Clone)]
pub struct MarketDataSnapshotBuilder {
    valuation_date: Date,
    time_series: HashMap<ObservableId, DateDoubleTimeSeries>,
    values: HashMap<MarketDataId, MarketDataValue>,
    rules: MarketDataRules,
}

impl MarketDataSnapshotBuilder {
    /// Adds a time series, replacing any existing one.
    #[must_use]
    pub fn add_time_series(
        mut self,
        id: impl Into<ObservableId>,
        series: DateDoubleTimeSeries,
    ) -> Self {
        self.time_series.insert(id.into(), series);
        self
    }

    /// Adds a value, replacing any existing one.
    #[must_use]
    pub fn add_value(mut self, id: MarketDataId, value: impl Into<MarketDataValue>) -> Self {
        self.values.insert(id, value.into());
        self
    }

    /// Adds a spot FX rate in units of `counter` per unit of `base`.
    #[must_use]
    pub fn add_fx_rate(self, base: Currency, counter: Currency, rate: f64) -> Self {
        self.add_value(MarketDataId::fx_rate(base, counter), rate)
    }

    /// Sets the rules.
    #[must_use]
    pub fn rules(mut self, rules: MarketDataRules) -> Self {
        self.rules = rules;
        self
    }

    /// Builds the snapshot.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidInput` if an FX rate is not positive and
    /// finite, or if an FX rate pairs a currency with itself.
    pub fn build(self) -> MarketResult<MarketDataSnapshot> {
        for (id, value) in &self.values {
            if let MarketDataId::FxRate { base, counter } = id {
                if base == counter {
                    return Err(MarketError::invalid_input(format!(
                        "{id} must pair two distinct currencies"
                    )));
                }
                match value.as_scalar() {
                    Some(rate) if rate.is_finite() && rate > 0.0 => {}
                    _ => {
                        return Err(MarketError::invalid_input(format!(
                            "{id} must be a positive finite number"
                        )))
                    }
                }
            }
        }
        log::debug!(
            "market data snapshot for {}: {} time series, {} values",
            self.valuation_date,
            self.time_series.len(),
            self.values.len()
        );
        Ok(MarketDataSnapshot {
            valuation_date: self.valuation_date,
            time_series: self.time_series,
            values: self.values,
            rules: self.rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marketdata::{MarketDataMappings, MarketDataRule};
    use strata_basics::IborIndex;
    use strata_math::CurveInterpolator;

    fn valuation_date() -> Date {
        Date::from_ymd(2014, 1, 22).unwrap()
    }

    #[test]
    fn test_missing_time_series_is_empty() {
        let snapshot = MarketDataSnapshot::builder(valuation_date()).build().unwrap();
        let id = ObservableId::from(strata_basics::RateIndex::from(IborIndex::USD_LIBOR_3M));
        assert!(!snapshot.contains_time_series(&id));
        assert!(snapshot.time_series(&id).is_empty());
    }

    #[test]
    fn test_missing_value() {
        let snapshot = MarketDataSnapshot::builder(valuation_date()).build().unwrap();
        let id = MarketDataId::discount_curve(Currency::USD, "Default");
        assert!(matches!(
            snapshot.value(&id),
            Err(MarketError::MissingData { .. })
        ));
        assert!(snapshot.fx_rate(Currency::USD, Currency::EUR).is_err());
        assert_eq!(snapshot.fx_rate(Currency::USD, Currency::USD).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_fx_rate_rejected() {
        let result = MarketDataSnapshot::builder(valuation_date())
            .add_fx_rate(Currency::USD, Currency::GBP, -1.0)
            .build();
        assert!(result.unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_discount_curve_by_rule() {
        let curve = InterpolatedNodalCurve::of(
            "USD-Disc",
            vec![0.5, 1.0],
            vec![0.99, 0.98],
            CurveInterpolator::Linear,
        )
        .unwrap();
        let snapshot = MarketDataSnapshot::builder(valuation_date())
            .add_value(MarketDataId::discount_curve(Currency::USD, "Default"), curve.clone())
            .rules(MarketDataRules::of(vec![MarketDataRule::any_target(
                MarketDataMappings::of("Default"),
            )]))
            .build()
            .unwrap();
        assert_eq!(snapshot.discount_curve(Currency::USD, "Swap").unwrap(), &curve);
        assert!(snapshot.discount_curve(Currency::GBP, "Swap").is_err());
        assert!(snapshot
            .curve(&MarketDataId::fx_rate(Currency::USD, Currency::GBP))
            .is_err());
    }
}
