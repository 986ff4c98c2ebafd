//! FX forward rates.
//!
//! - [`FxForwardRates`]: Provider contract
//! - [`DiscountFxForwardRates`]: Covered interest parity from two discount curves
//! - [`FxForwardRatesDecoratedForward`]: An underlying provider seen from a forward date

mod availability;
mod decorated;
mod discount;
mod pair;
mod rates;
mod sensitivity;

pub use availability::Availability;
pub use decorated::FxForwardRatesDecoratedForward;
pub use discount::DiscountFxForwardRates;
pub use pair::CurrencyPair;
pub use rates::FxForwardRates;
pub use sensitivity::{
    CurrencyParameterSensitivities, CurrencyParameterSensitivity, FxForwardSensitivity,
    MultiCurrencyAmount,
};
