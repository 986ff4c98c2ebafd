//! Exponential extrapolation.

use super::{single_node_sensitivity, Boundary, Extrapolator};
use crate::error::{MathError, MathResult};
use crate::interpolation::Interpolator;

/// Exponential extrapolation through the boundary node.
///
/// ```text
/// y(x) = exp(x · ln(y_b) / x_b)
/// ```
///
/// For discount factors this extends the curve with a constant zero rate
/// equal to the boundary's. The boundary must have `x_b ≠ 0` and `y_b > 0`;
/// otherwise evaluation fails with [`MathError::Undefined`].
///
/// # Example
///
/// ```rust
/// use strata_math::extrapolation::{Boundary, Extrapolator, ExponentialExtrapolator};
/// use strata_math::interpolation::LinearInterpolator;
///
/// let df_2y = (-0.04_f64 * 2.0).exp();
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.97, df_2y]).unwrap();
/// let df_5y = ExponentialExtrapolator.extrapolate(5.0, Boundary::Right, &interp).unwrap();
/// assert!((df_5y - (-0.04_f64 * 5.0).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialExtrapolator;

impl ExponentialExtrapolator {
    /// Returns (boundary index, boundary y, rate, value) at x.
    fn evaluate(
        x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<(usize, f64, f64, f64)> {
        let (i, x_b, y_b) = side.node(interpolator);
        if x_b == 0.0 {
            return Err(MathError::undefined(
                "exponential extrapolation",
                "boundary node is at x = 0",
            ));
        }
        if y_b <= 0.0 {
            return Err(MathError::undefined(
                "exponential extrapolation",
                format!("boundary value must be positive, found {y_b}"),
            ));
        }
        let rate = y_b.ln() / x_b;
        Ok((i, y_b, rate, (x * rate).exp()))
    }
}

impl Extrapolator for ExponentialExtrapolator {
    fn name(&self) -> &'static str {
        "Exponential"
    }

    fn extrapolate(
        &self,
        x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        Self::evaluate(x, side, interpolator).map(|(.., y)| y)
    }

    fn derivative(
        &self,
        x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        let (_, _, rate, y) = Self::evaluate(x, side, interpolator)?;
        Ok(y * rate)
    }

    fn parameter_sensitivity(
        &self,
        x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<Vec<f64>> {
        let (i, y_b, _, y) = Self::evaluate(x, side, interpolator)?;
        let (_, x_b, _) = side.node(interpolator);
        let n = interpolator.x_values().len();
        Ok(single_node_sensitivity(n, i, y * x / (x_b * y_b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::LinearInterpolator;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_boundary_node() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0, 3.0], vec![5.0, 7.0, 8.0]).unwrap();
        let y = ExponentialExtrapolator.extrapolate(3.0, Boundary::Right, &interp).unwrap();
        assert_relative_eq!(y, 8.0, epsilon = 1e-12);
        let y = ExponentialExtrapolator.extrapolate(1.0, Boundary::Left, &interp).unwrap();
        assert_relative_eq!(y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_undefined_at_zero_boundary() {
        let interp = LinearInterpolator::new(vec![0.0, 2.0, 3.0], vec![3.0, 5.0, 6.0]).unwrap();
        let result = ExponentialExtrapolator.extrapolate(-1.0, Boundary::Left, &interp);
        assert!(matches!(result, Err(MathError::Undefined { .. })));
        // the right side is still well defined
        assert!(ExponentialExtrapolator.extrapolate(4.0, Boundary::Right, &interp).is_ok());
    }

    #[test]
    fn test_undefined_for_non_positive_value() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![1.0, -1.0]).unwrap();
        assert!(ExponentialExtrapolator.extrapolate(3.0, Boundary::Right, &interp).is_err());
    }
}
