//! Linear extrapolation.

use super::{Boundary, Extrapolator};
use crate::error::MathResult;
use crate::interpolation::Interpolator;

/// Linear extrapolation - continues with the interpolator's slope at the boundary.
///
/// ```text
/// y(x) = y_b + y'(x_b) · (x - x_b)
/// ```
///
/// # Example
///
/// ```rust
/// use strata_math::extrapolation::{Boundary, Extrapolator, LinearExtrapolator};
/// use strata_math::interpolation::LinearInterpolator;
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![1.0, 3.0]).unwrap();
/// let y = LinearExtrapolator.extrapolate(4.0, Boundary::Right, &interp).unwrap();
/// assert_eq!(y, 7.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearExtrapolator;

impl Extrapolator for LinearExtrapolator {
    fn name(&self) -> &'static str {
        "Linear"
    }

    fn extrapolate(
        &self,
        x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        let (_, x_b, y_b) = side.node(interpolator);
        let slope = interpolator.derivative(x_b)?;
        Ok(y_b + slope * (x - x_b))
    }

    fn derivative(
        &self,
        _x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        let (_, x_b, _) = side.node(interpolator);
        interpolator.derivative(x_b)
    }

    fn parameter_sensitivity(
        &self,
        x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<Vec<f64>> {
        let (i, x_b, _) = side.node(interpolator);
        let mut sens = interpolator.derivative_parameter_sensitivity(x_b)?;
        for s in &mut sens {
            *s *= x - x_b;
        }
        sens[i] += 1.0;
        Ok(sens)
    }
}
