//! Extrapolation methods for nodal curves.
//!
//! Extrapolators extend an interpolator beyond its node range, using only the
//! boundary node on the side being extended (and, for [`LinearExtrapolator`],
//! the interpolator's slope at that node):
//!
//! - [`FlatExtrapolator`]: Constant boundary value
//! - [`LinearExtrapolator`]: Tangent line at the boundary
//! - [`ExponentialExtrapolator`]: `y = exp(x · ln(y_b) / x_b)`, matching the boundary node
//! - [`ExceptionExtrapolator`]: Rejects every point outside the range
//!
//! | Method | Derivative | Requirement |
//! |--------|------------|-------------|
//! | Flat | Zero | None |
//! | Linear | Boundary slope | None |
//! | Exponential | `y · ln(y_b) / x_b` | `x_b ≠ 0`, `y_b > 0` |
//! | Exception | n/a | n/a |

mod exception;
mod exponential;
mod flat;
mod linear;

pub use exception::ExceptionExtrapolator;
pub use exponential::ExponentialExtrapolator;
pub use flat::FlatExtrapolator;
pub use linear::LinearExtrapolator;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MathResult;
use crate::interpolation::Interpolator;

/// The side of the node range being extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Below the first node.
    Left,
    /// Above the last node.
    Right,
}

impl Boundary {
    /// Returns the index of the boundary node for `n` nodes.
    #[must_use]
    pub fn index(&self, n: usize) -> usize {
        match self {
            Boundary::Left => 0,
            Boundary::Right => n - 1,
        }
    }

    /// Returns the boundary node of the interpolator.
    #[must_use]
    pub fn node(&self, interpolator: &dyn Interpolator) -> (usize, f64, f64) {
        let i = self.index(interpolator.x_values().len());
        (i, interpolator.x_values()[i], interpolator.y_values()[i])
    }
}

/// Trait for extrapolation methods.
pub trait Extrapolator: Send + Sync + fmt::Debug {
    /// Returns the name of the extrapolation method.
    fn name(&self) -> &'static str;

    /// Extrapolates to `x` beyond the given boundary of the interpolator.
    fn extrapolate(&self, x: f64, side: Boundary, interpolator: &dyn Interpolator)
        -> MathResult<f64>;

    /// Returns the first derivative of the extrapolated function at `x`.
    fn derivative(&self, x: f64, side: Boundary, interpolator: &dyn Interpolator)
        -> MathResult<f64>;

    /// Returns the sensitivity of the extrapolated value to each node's y-value.
    fn parameter_sensitivity(
        &self,
        x: f64,
        side: Boundary,
        interpolator: &dyn Interpolator,
    ) -> MathResult<Vec<f64>>;
}

/// Selects an extrapolation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurveExtrapolator {
    /// Constant boundary value
    #[default]
    Flat,
    /// Tangent line at the boundary
    Linear,
    /// Exponential through the origin-anchored boundary node
    Exponential,
    /// Error outside the node range
    Exception,
}

static FLAT: FlatExtrapolator = FlatExtrapolator;
static LINEAR: LinearExtrapolator = LinearExtrapolator;
static EXPONENTIAL: ExponentialExtrapolator = ExponentialExtrapolator;
static EXCEPTION: ExceptionExtrapolator = ExceptionExtrapolator;

impl CurveExtrapolator {
    /// Returns the shared extrapolator implementing this method.
    #[must_use]
    pub fn extrapolator(&self) -> &'static dyn Extrapolator {
        match self {
            CurveExtrapolator::Flat => &FLAT,
            CurveExtrapolator::Linear => &LINEAR,
            CurveExtrapolator::Exponential => &EXPONENTIAL,
            CurveExtrapolator::Exception => &EXCEPTION,
        }
    }

    /// Returns the name of the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.extrapolator().name()
    }
}

impl fmt::Display for CurveExtrapolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns a sensitivity vector with a single non-zero entry.
pub(crate) fn single_node_sensitivity(n: usize, index: usize, value: f64) -> Vec<f64> {
    let mut sens = vec![0.0; n];
    sens[index] = value;
    sens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::LinearInterpolator;
    use approx::assert_relative_eq;

    fn base() -> LinearInterpolator {
        LinearInterpolator::new(vec![1.0, 2.0, 3.0], vec![5.0, 7.0, 8.0]).unwrap()
    }

    #[test]
    fn test_boundary_nodes() {
        let interp = base();
        assert_eq!(Boundary::Left.node(&interp), (0, 1.0, 5.0));
        assert_eq!(Boundary::Right.node(&interp), (2, 3.0, 8.0));
    }

    #[test]
    fn test_names() {
        assert_eq!(CurveExtrapolator::Flat.name(), "Flat");
        assert_eq!(CurveExtrapolator::Exponential.to_string(), "Exponential");
        assert_eq!(CurveExtrapolator::default(), CurveExtrapolator::Flat);
    }

    #[test]
    fn test_sensitivities_match_bumped_nodes() {
        let xs = vec![1.0, 2.0, 3.0];
        let ys = vec![5.0, 7.0, 8.0];
        let shift = 1e-7;
        let methods = [
            CurveExtrapolator::Flat,
            CurveExtrapolator::Linear,
            CurveExtrapolator::Exponential,
        ];
        for method in methods {
            let extrap = method.extrapolator();
            let base = LinearInterpolator::new(xs.clone(), ys.clone()).unwrap();
            for (x, side) in [(0.5, Boundary::Left), (4.5, Boundary::Right)] {
                let sens = extrap.parameter_sensitivity(x, side, &base).unwrap();
                let value = extrap.extrapolate(x, side, &base).unwrap();
                for i in 0..xs.len() {
                    let mut bumped = ys.clone();
                    bumped[i] += shift;
                    let other = LinearInterpolator::new(xs.clone(), bumped).unwrap();
                    let fd = (extrap.extrapolate(x, side, &other).unwrap() - value) / shift;
                    assert_relative_eq!(sens[i], fd, epsilon = 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_derivatives_match_finite_difference() {
        let interp = base();
        let h = 1e-6;
        for method in [
            CurveExtrapolator::Flat,
            CurveExtrapolator::Linear,
            CurveExtrapolator::Exponential,
        ] {
            let extrap = method.extrapolator();
            for (x, side) in [(0.5, Boundary::Left), (4.5, Boundary::Right)] {
                let fd = (extrap.extrapolate(x + h, side, &interp).unwrap()
                    - extrap.extrapolate(x - h, side, &interp).unwrap())
                    / (2.0 * h);
                assert_relative_eq!(
                    extrap.derivative(x, side, &interp).unwrap(),
                    fd,
                    epsilon = 1e-6
                );
            }
        }
    }
}
