//! # Strata Market
//!
//! Curves and market data for the Strata analytics library.
//!
//! This crate provides:
//!
//! - **Curves**: [`Curve`] and [`NodalCurve`] traits with [`InterpolatedNodalCurve`],
//!   bump-free parameter sensitivities and shift operations
//! - **Configuration**: [`CurveConfig`], the serializable form of a curve
//! - **Market Data**: [`MarketDataSnapshot`] holding time series, current values
//!   and curve-group rules
//! - **FX**: [`FxForwardRates`] providers, including a forward-dated decorator
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_basics::ValueAdjustment;
//! use strata_market::prelude::*;
//! use strata_math::CurveInterpolator;
//!
//! let curve = InterpolatedNodalCurve::of(
//!     "TestCurve",
//!     vec![1.0, 2.0, 3.0],
//!     vec![5.0, 7.0, 8.0],
//!     CurveInterpolator::LogLinear,
//! )
//! .unwrap();
//!
//! let shifted = curve.shifted_by_adjustments(&[ValueAdjustment::Absolute(3.0)]).unwrap();
//! assert_eq!(shifted.y_values(), &[3.0, 7.0, 8.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod curve;
pub mod error;
pub mod fx;
pub mod marketdata;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::curve::{
        Curve, CurveConfig, CurveMetadata, CurveName, InterpolatedNodalCurve, NodalCurve,
        NodeConfig, ParameterMetadata,
    };
    pub use crate::error::{MarketError, MarketResult};
    pub use crate::fx::{
        Availability, CurrencyPair, DiscountFxForwardRates, FxForwardRates,
        FxForwardRatesDecoratedForward, FxForwardSensitivity,
    };
    pub use crate::marketdata::{
        CurveGroupName, DateDoubleTimeSeries, MarketDataFeed, MarketDataId, MarketDataMappings,
        MarketDataRule, MarketDataRules, MarketDataSnapshot, ObservableId,
    };
}

pub use curve::{Curve, CurveConfig, CurveMetadata, CurveName, InterpolatedNodalCurve, NodalCurve};
pub use error::{MarketError, MarketResult};
pub use fx::{FxForwardRates, FxForwardRatesDecoratedForward};
pub use marketdata::MarketDataSnapshot;
