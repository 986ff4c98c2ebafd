//! FX forward rates seen from a later valuation date.

use std::sync::Arc;
use strata_basics::{Currency, Date};

use super::availability::Availability;
use super::pair::CurrencyPair;
use super::rates::FxForwardRates;
use super::sensitivity::{CurrencyParameterSensitivities, FxForwardSensitivity, MultiCurrencyAmount};
use crate::curve::{CurveName, InterpolatedNodalCurve, ParameterMetadata};
use crate::error::MarketResult;

/// Presents an underlying provider as valid on a forward valuation date.
///
/// Rates are the implied forward rates of the underlying. Only the
/// operations used for direct valuation are supported; sensitivities and
/// curve lookup report [`Availability::NotAvailable`].
#[derive(Debug, Clone)]
pub struct FxForwardRatesDecoratedForward {
    underlying: Arc<dyn FxForwardRates>,
    valuation_date: Date,
}

impl FxForwardRatesDecoratedForward {
    /// Wraps `underlying` with a forward valuation date.
    #[must_use]
    pub fn of(underlying: Arc<dyn FxForwardRates>, valuation_date: Date) -> Self {
        Self {
            underlying,
            valuation_date,
        }
    }

    /// Returns the underlying provider.
    #[must_use]
    pub fn underlying(&self) -> &Arc<dyn FxForwardRates> {
        &self.underlying
    }
}

impl FxForwardRates for FxForwardRatesDecoratedForward {
    fn currency_pair(&self) -> CurrencyPair {
        self.underlying.currency_pair()
    }

    fn valuation_date(&self) -> Date {
        self.valuation_date
    }

    fn rate(&self, base_currency: Currency, reference_date: Date) -> MarketResult<f64> {
        self.underlying.rate(base_currency, reference_date)
    }

    fn parameter_count(&self) -> usize {
        self.underlying.parameter_count()
    }

    fn parameter(&self, index: usize) -> MarketResult<f64> {
        self.underlying.parameter(index)
    }

    fn parameter_metadata(&self, index: usize) -> MarketResult<ParameterMetadata> {
        self.underlying.parameter_metadata(index)
    }

    fn with_parameter(&self, index: usize, value: f64) -> MarketResult<Arc<dyn FxForwardRates>> {
        let underlying = self.underlying.with_parameter(index, value)?;
        Ok(Arc::new(Self::of(underlying, self.valuation_date)))
    }

    fn with_perturbation(
        &self,
        perturbation: &dyn Fn(usize, f64, &ParameterMetadata) -> f64,
    ) -> MarketResult<Arc<dyn FxForwardRates>> {
        let underlying = self.underlying.with_perturbation(perturbation)?;
        Ok(Arc::new(Self::of(underlying, self.valuation_date)))
    }

    fn rate_point_sensitivity(
        &self,
        _base_currency: Currency,
        _reference_date: Date,
    ) -> MarketResult<Availability<FxForwardSensitivity>> {
        Ok(Availability::not_available("rate_point_sensitivity"))
    }

    fn rate_fx_spot_sensitivity(
        &self,
        _base_currency: Currency,
        _reference_date: Date,
    ) -> MarketResult<Availability<f64>> {
        Ok(Availability::not_available("rate_fx_spot_sensitivity"))
    }

    fn parameter_sensitivity(
        &self,
        _point: &FxForwardSensitivity,
    ) -> MarketResult<Availability<CurrencyParameterSensitivities>> {
        Ok(Availability::not_available("parameter_sensitivity"))
    }

    fn currency_exposure(
        &self,
        _point: &FxForwardSensitivity,
    ) -> MarketResult<Availability<MultiCurrencyAmount>> {
        Ok(Availability::not_available("currency_exposure"))
    }

    fn find_curve(&self, _name: &CurveName) -> Availability<Option<InterpolatedNodalCurve>> {
        Availability::not_available("find_curve")
    }
}
