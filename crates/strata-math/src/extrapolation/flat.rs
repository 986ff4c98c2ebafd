//! Flat (constant) extrapolation.

use super::{single_node_sensitivity, Boundary, Extrapolator};
use crate::error::MathResult;
use crate::interpolation::Interpolator;

/// Flat extrapolation - constant value from the boundary node.
///
/// This is the simplest extrapolation method, maintaining a constant value
/// equal to the boundary node. The derivative is zero outside the range.
///
/// # Example
///
/// ```rust
/// use strata_math::extrapolation::{Boundary, Extrapolator, FlatExtrapolator};
/// use strata_math::interpolation::LinearInterpolator;
///
/// let interp = LinearInterpolator::new(vec![1.0, 2.0], vec![0.04, 0.05]).unwrap();
/// let rate = FlatExtrapolator.extrapolate(15.0, Boundary::Right, &interp).unwrap();
/// assert_eq!(rate, 0.05);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatExtrapolator;

impl Extrapolator for FlatExtrapolator {
    fn name(&self) -> &'static str {
        "Flat"
    }

    fn extrapolate(
        &self,
        _x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        let (_, _, y_b) = side.node(interpolator);
        Ok(y_b)
    }

    fn derivative(
        &self,
        _x: f64,
        _side: Boundary,
        _interpolator: &dyn Interpolator,
    ) -> MathResult<f64> {
        Ok(0.0)
    }

    fn parameter_sensitivity(
        &self,
        _x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<Vec<f64>> {
        let n = interpolator.x_values().len();
        Ok(single_node_sensitivity(n, side.index(n), 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::LinearInterpolator;
    use approx::assert_relative_eq;

    #[test]
    fn test_flat_returns_boundary_value() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0, 3.0], vec![5.0, 7.0, 8.0]).unwrap();

        for x in [3.5, 10.0, 1000.0] {
            let y = FlatExtrapolator.extrapolate(x, Boundary::Right, &interp).unwrap();
            assert_relative_eq!(y, 8.0);
        }
        assert_relative_eq!(
            FlatExtrapolator.extrapolate(-4.0, Boundary::Left, &interp).unwrap(),
            5.0
        );
        assert_eq!(
            FlatExtrapolator.parameter_sensitivity(0.0, Boundary::Left, &interp).unwrap(),
            vec![1.0, 0.0, 0.0]
        );
    }
}
