//! Extrapolator that rejects every point outside the node range.

use super::{Boundary, Extrapolator};
use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Extrapolator that fails with [`MathError::ExtrapolationNotAllowed`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ExceptionExtrapolator;

fn out_of_range(x: f64, interpolator: &dyn Interpolator) -> MathError {
    MathError::ExtrapolationNotAllowed {
        x,
        min: interpolator.min_x(),
        max: interpolator.max_x(),
    }
}

impl Extrapolator for ExceptionExtrapolator {
    fn name(&self) -> &'static str {
        "Exception"
    }

    fn extrapolate(
        &self,
        x: f64,
        _side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        Err(out_of_range(x, interpolator))
    }

    fn derivative(
        &self,
        x: f64,
        _side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        Err(out_of_range(x, interpolator))
    }

    fn parameter_sensitivity(
        &self,
        x: f64,
        _side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<Vec<f64>> {
        Err(out_of_range(x, interpolator))
    }
}
