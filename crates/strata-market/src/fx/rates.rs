//! The FX forward rate provider contract.

use std::fmt::Debug;
use std::sync::Arc;
use strata_basics::{Currency, Date};

use super::availability::Availability;
use super::pair::CurrencyPair;
use super::sensitivity::{CurrencyParameterSensitivities, FxForwardSensitivity, MultiCurrencyAmount};
use crate::curve::{CurveName, InterpolatedNodalCurve, ParameterMetadata};
use crate::error::MarketResult;

/// Provides forward FX rates of a currency pair.
///
/// The rate for `base_currency` on a date is the number of units of the
/// other currency of the pair exchanged for one unit of `base_currency`.
///
/// Sensitivity operations return [`Availability`] so that providers used only
/// for direct valuation can decline them without failing.
pub trait FxForwardRates: Send + Sync + Debug {
    /// Returns the currency pair.
    fn currency_pair(&self) -> CurrencyPair;

    /// Returns the valuation date.
    fn valuation_date(&self) -> Date;

    /// Returns the forward rate for `base_currency` on `reference_date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is not in the pair or the curves
    /// cannot be evaluated at the date.
    fn rate(&self, base_currency: Currency, reference_date: Date) -> MarketResult<f64>;

    /// Returns the number of parameters.
    fn parameter_count(&self) -> usize;

    /// Returns the value of parameter `index`.
    fn parameter(&self, index: usize) -> MarketResult<f64>;

    /// Returns the description of parameter `index`.
    fn parameter_metadata(&self, index: usize) -> MarketResult<ParameterMetadata>;

    /// Returns a provider with parameter `index` replaced.
    fn with_parameter(&self, index: usize, value: f64) -> MarketResult<Arc<dyn FxForwardRates>>;

    /// Returns a provider with every parameter passed through `perturbation`.
    fn with_perturbation(
        &self,
        perturbation: &dyn Fn(usize, f64, &ParameterMetadata) -> f64,
    ) -> MarketResult<Arc<dyn FxForwardRates>>;

    /// Returns the unit point sensitivity to the forward rate.
    fn rate_point_sensitivity(
        &self,
        base_currency: Currency,
        reference_date: Date,
    ) -> MarketResult<Availability<FxForwardSensitivity>>;

    /// Returns the derivative of the forward rate with respect to the spot rate.
    fn rate_fx_spot_sensitivity(
        &self,
        base_currency: Currency,
        reference_date: Date,
    ) -> MarketResult<Availability<f64>>;

    /// Converts a point sensitivity into sensitivities to the curve parameters.
    fn parameter_sensitivity(
        &self,
        point: &FxForwardSensitivity,
    ) -> MarketResult<Availability<CurrencyParameterSensitivities>>;

    /// Returns the currency exposure implied by a point sensitivity.
    fn currency_exposure(
        &self,
        point: &FxForwardSensitivity,
    ) -> MarketResult<Availability<MultiCurrencyAmount>>;

    /// Finds a curve used by the provider.
    fn find_curve(&self, name: &CurveName) -> Availability<Option<InterpolatedNodalCurve>>;
}
