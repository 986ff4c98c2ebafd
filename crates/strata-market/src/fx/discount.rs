//! FX forward rates implied by two discount curves.

use std::sync::Arc;
use strata_basics::{Currency, Date, DayCount};

use super::availability::Availability;
use super::pair::CurrencyPair;
use super::rates::FxForwardRates;
use super::sensitivity::{
    CurrencyParameterSensitivities, CurrencyParameterSensitivity, FxForwardSensitivity,
    MultiCurrencyAmount,
};
use crate::curve::{Curve, CurveName, InterpolatedNodalCurve, ParameterMetadata};
use crate::error::{MarketError, MarketResult};
use crate::marketdata::MarketDataSnapshot;

/// Day count converting dates to curve x-values.
const CURVE_DAY_COUNT: DayCount = DayCount::Act365F;

/// FX forward rates from covered interest parity.
///
/// ```text
/// F(t) = S × DF_base(t) / DF_counter(t)
/// ```
///
/// Both curves hold discount factors against the Act/365F year fraction from
/// the valuation date. The parameters are those of the base currency curve
/// followed by those of the counter currency curve.
///
/// # Example
///
/// ```rust
/// use strata_basics::{Currency, Date};
/// use strata_market::prelude::*;
/// use strata_math::CurveInterpolator;
///
/// let times = vec![0.0, 1.0];
/// let linear = CurveInterpolator::Linear;
/// let gbp = InterpolatedNodalCurve::of("GBP-Disc", times.clone(), vec![1.0, 0.98], linear)
///     .unwrap();
/// let usd = InterpolatedNodalCurve::of("USD-Disc", times, vec![1.0, 0.99], linear).unwrap();
/// let valuation = Date::from_ymd(2016, 1, 5).unwrap();
/// let rates = DiscountFxForwardRates::of(
///     CurrencyPair::new(Currency::GBP, Currency::USD),
///     1.6,
///     gbp,
///     usd,
///     valuation,
/// )
/// .unwrap();
///
/// assert_eq!(rates.rate(Currency::GBP, valuation).unwrap(), 1.6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountFxForwardRates {
    currency_pair: CurrencyPair,
    fx_spot: f64,
    base_curve: InterpolatedNodalCurve,
    counter_curve: InterpolatedNodalCurve,
    valuation_date: Date,
}

impl DiscountFxForwardRates {
    /// Creates the provider.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidInput` if the pair repeats a currency or
    /// the spot rate is not positive and finite.
    pub fn of(
        currency_pair: CurrencyPair,
        fx_spot: f64,
        base_curve: InterpolatedNodalCurve,
        counter_curve: InterpolatedNodalCurve,
        valuation_date: Date,
    ) -> MarketResult<Self> {
        if currency_pair.is_identity() {
            return Err(MarketError::invalid_input(format!(
                "Currency pair {currency_pair} must hold two distinct currencies"
            )));
        }
        if !(fx_spot.is_finite() && fx_spot > 0.0) {
            return Err(MarketError::invalid_input(format!(
                "FX spot rate for {currency_pair} must be positive, got {fx_spot}"
            )));
        }
        Ok(Self {
            currency_pair,
            fx_spot,
            base_curve,
            counter_curve,
            valuation_date,
        })
    }

    /// Creates the provider from the spot rate and discount curves of a snapshot.
    ///
    /// The discount curves are those the snapshot rules assign to `target_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if the spot rate or a curve is missing.
    pub fn from_snapshot(
        snapshot: &MarketDataSnapshot,
        currency_pair: CurrencyPair,
        target_type: &str,
    ) -> MarketResult<Self> {
        let fx_spot = snapshot.fx_rate(currency_pair.base, currency_pair.counter)?;
        let base_curve = snapshot.discount_curve(currency_pair.base, target_type)?;
        let counter_curve = snapshot.discount_curve(currency_pair.counter, target_type)?;
        Self::of(
            currency_pair,
            fx_spot,
            base_curve.clone(),
            counter_curve.clone(),
            snapshot.valuation_date(),
        )
    }

    /// Returns the spot rate, counter currency per unit of base currency.
    #[must_use]
    pub fn fx_spot(&self) -> f64 {
        self.fx_spot
    }

    /// Returns the base currency discount curve.
    #[must_use]
    pub fn base_curve(&self) -> &InterpolatedNodalCurve {
        &self.base_curve
    }

    /// Returns the counter currency discount curve.
    #[must_use]
    pub fn counter_curve(&self) -> &InterpolatedNodalCurve {
        &self.counter_curve
    }

    fn year_fraction(&self, date: Date) -> f64 {
        CURVE_DAY_COUNT.year_fraction(self.valuation_date, date)
    }

    fn discount_factors(&self, date: Date) -> MarketResult<(f64, f64)> {
        let t = self.year_fraction(date);
        Ok((self.base_curve.y_value(t)?, self.counter_curve.y_value(t)?))
    }

    /// Returns true if the rate for `base_currency` is the inverse of the pair rate.
    fn is_inverse(&self, base_currency: Currency) -> MarketResult<bool> {
        if base_currency == self.currency_pair.base {
            Ok(false)
        } else if base_currency == self.currency_pair.counter {
            Ok(true)
        } else {
            Err(MarketError::invalid_input(format!(
                "Currency {base_currency} is not in {}",
                self.currency_pair
            )))
        }
    }

    /// Maps a combined parameter index at or beyond the base curve's
    /// parameters onto the counter curve.
    fn counter_index(&self, index: usize) -> MarketResult<usize> {
        let local = index - self.base_curve.parameter_count();
        if local >= self.counter_curve.parameter_count() {
            return Err(MarketError::index_out_of_bounds(index, self.parameter_count()));
        }
        Ok(local)
    }

    fn with_curves(
        &self,
        base_curve: InterpolatedNodalCurve,
        counter_curve: InterpolatedNodalCurve,
    ) -> Arc<dyn FxForwardRates> {
        Arc::new(Self {
            base_curve,
            counter_curve,
            ..self.clone()
        })
    }
}

impl FxForwardRates for DiscountFxForwardRates {
    fn currency_pair(&self) -> CurrencyPair {
        self.currency_pair
    }

    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn rate(&self, base_currency: Currency, reference_date: Date) -> MarketResult<f64> {
        let inverse = self.is_inverse(base_currency)?;
        let (df_base, df_counter) = self.discount_factors(reference_date)?;
        let forward = self.fx_spot * df_base / df_counter;
        Ok(if inverse { 1.0 / forward } else { forward })
    }

    fn parameter_count(&self) -> usize {
        self.base_curve.parameter_count() + self.counter_curve.parameter_count()
    }

    fn parameter(&self, index: usize) -> MarketResult<f64> {
        let split = self.base_curve.parameter_count();
        if index < split {
            self.base_curve.parameter(index)
        } else {
            self.counter_curve.parameter(self.counter_index(index)?)
        }
    }

    fn parameter_metadata(&self, index: usize) -> MarketResult<ParameterMetadata> {
        let split = self.base_curve.parameter_count();
        if index < split {
            self.base_curve.parameter_metadata(index)
        } else {
            self.counter_curve.parameter_metadata(self.counter_index(index)?)
        }
    }

    fn with_parameter(&self, index: usize, value: f64) -> MarketResult<Arc<dyn FxForwardRates>> {
        let split = self.base_curve.parameter_count();
        if index < split {
            let base = self.base_curve.with_parameter(index, value)?;
            Ok(self.with_curves(base, self.counter_curve.clone()))
        } else {
            let counter = self.counter_curve.with_parameter(self.counter_index(index)?, value)?;
            Ok(self.with_curves(self.base_curve.clone(), counter))
        }
    }

    fn with_perturbation(
        &self,
        perturbation: &dyn Fn(usize, f64, &ParameterMetadata) -> f64,
    ) -> MarketResult<Arc<dyn FxForwardRates>> {
        let split = self.base_curve.parameter_count();
        let base = self.base_curve.with_perturbation(perturbation)?;
        let counter = self
            .counter_curve
            .with_perturbation(&|i, value, meta| perturbation(split + i, value, meta))?;
        Ok(self.with_curves(base, counter))
    }

    fn rate_point_sensitivity(
        &self,
        base_currency: Currency,
        reference_date: Date,
    ) -> MarketResult<Availability<FxForwardSensitivity>> {
        let point =
            FxForwardSensitivity::of(self.currency_pair, base_currency, reference_date, 1.0)?;
        Ok(Availability::Available(point))
    }

    fn rate_fx_spot_sensitivity(
        &self,
        base_currency: Currency,
        reference_date: Date,
    ) -> MarketResult<Availability<f64>> {
        let inverse = self.is_inverse(base_currency)?;
        let (df_base, df_counter) = self.discount_factors(reference_date)?;
        let ratio = df_base / df_counter;
        Ok(Availability::Available(if inverse { 1.0 / ratio } else { ratio }))
    }

    fn parameter_sensitivity(
        &self,
        point: &FxForwardSensitivity,
    ) -> MarketResult<Availability<CurrencyParameterSensitivities>> {
        let inverse = self.is_inverse(point.reference_currency)?;
        let t = self.year_fraction(point.reference_date);
        let (df_base, df_counter) = self.discount_factors(point.reference_date)?;
        let spot = self.fx_spot;
        let (d_base, d_counter) = if inverse {
            (
                -df_counter / (spot * df_base * df_base),
                1.0 / (spot * df_base),
            )
        } else {
            (spot / df_counter, -spot * df_base / (df_counter * df_counter))
        };
        let scale = |sens: Vec<f64>, factor: f64| -> Vec<f64> {
            sens.into_iter()
                .map(|s| s * factor * point.sensitivity)
                .collect()
        };
        let base = CurrencyParameterSensitivity {
            curve_name: self.base_curve.name().clone(),
            currency: point.currency,
            sensitivity: scale(self.base_curve.y_value_parameter_sensitivity(t)?, d_base),
        };
        let counter = CurrencyParameterSensitivity {
            curve_name: self.counter_curve.name().clone(),
            currency: point.currency,
            sensitivity: scale(
                self.counter_curve.y_value_parameter_sensitivity(t)?,
                d_counter,
            ),
        };
        Ok(Availability::Available(CurrencyParameterSensitivities::of(
            vec![base, counter],
        )))
    }

    /// The exposure holds `s · ∂F/∂S` in the reference currency, offset by
    /// `S` times that amount in the counter currency, where `S` is the spot
    /// rate for the reference currency.
    fn currency_exposure(
        &self,
        point: &FxForwardSensitivity,
    ) -> MarketResult<Availability<MultiCurrencyAmount>> {
        if point.currency != point.reference_counter_currency() {
            return Err(MarketError::invalid_input(
                "currency exposure requires the sensitivity currency \
                 to be the reference counter currency",
            ));
        }
        let inverse = self.is_inverse(point.reference_currency)?;
        let (df_base, df_counter) = self.discount_factors(point.reference_date)?;
        let (spot, spot_sensitivity) = if inverse {
            (1.0 / self.fx_spot, df_counter / df_base)
        } else {
            (self.fx_spot, df_base / df_counter)
        };
        let reference_amount = point.sensitivity * spot_sensitivity;
        let exposure = MultiCurrencyAmount::of([
            (point.reference_currency, reference_amount),
            (point.currency, -spot * reference_amount),
        ]);
        Ok(Availability::Available(exposure))
    }

    fn find_curve(&self, name: &CurveName) -> Availability<Option<InterpolatedNodalCurve>> {
        let found = [&self.base_curve, &self.counter_curve]
            .into_iter()
            .find(|curve| curve.name() == name)
            .cloned();
        Availability::Available(found)
    }
}
