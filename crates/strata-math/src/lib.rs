//! # Strata Math
//!
//! Numerical interpolation and extrapolation for the Strata analytics library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Linear, log-linear, natural cubic spline and double quadratic
//!   interpolators, each with analytic first derivatives and parameter sensitivities
//! - **Extrapolation**: Flat, linear, exponential and exception extrapolators applied
//!   independently on either side of the node range
//! - **Combination**: [`CombinedInterpolator`] dispatching between the two
//!
//! ## Design Philosophy
//!
//! - **Bump-Free Sensitivities**: Every method reports `∂y(x)/∂y_i` analytically
//! - **Selectable by Value**: [`CurveInterpolator`] and [`CurveExtrapolator`] are plain
//!   serializable enums; binding them to data yields a shared interpolator
//! - **Explicit Failures**: Out-of-range and undefined inputs are errors, never NaN

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod combined;
pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::combined::CombinedInterpolator;
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{
        Boundary, CurveExtrapolator, ExceptionExtrapolator, ExponentialExtrapolator,
        Extrapolator, FlatExtrapolator, LinearExtrapolator,
    };
    pub use crate::interpolation::{
        CubicSpline, CurveInterpolator, DoubleQuadratic, Interpolator, LinearInterpolator,
        LogLinearInterpolator,
    };
}

pub use combined::CombinedInterpolator;
pub use error::{MathError, MathResult};
pub use extrapolation::{Boundary, CurveExtrapolator, Extrapolator};
pub use interpolation::{CurveInterpolator, Interpolator};
