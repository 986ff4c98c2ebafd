//! An interpolator with independent left and right extrapolators.

use std::fmt;
use std::sync::Arc;

use crate::error::MathResult;
use crate::extrapolation::{Boundary, CurveExtrapolator};
use crate::interpolation::{CurveInterpolator, Interpolator};

/// Interpolates inside the node range and extrapolates outside it.
///
/// Points below the first node use the left extrapolator, points above the
/// last node use the right extrapolator, and everything in between (the end
/// nodes included) uses the bound interpolator.
///
/// The bound interpolator is shared, so cloning is cheap.
///
/// # Example
///
/// ```rust
/// use strata_math::prelude::*;
///
/// let combined = CombinedInterpolator::bind(
///     CurveInterpolator::Linear,
///     CurveExtrapolator::Flat,
///     CurveExtrapolator::Linear,
///     vec![1.0, 2.0, 3.0],
///     vec![5.0, 7.0, 8.0],
/// )
/// .unwrap();
///
/// assert_eq!(combined.y_value(0.0).unwrap(), 5.0);
/// assert_eq!(combined.y_value(2.5).unwrap(), 7.5);
/// assert_eq!(combined.y_value(4.0).unwrap(), 9.0);
/// ```
#[derive(Clone)]
pub struct CombinedInterpolator {
    method: CurveInterpolator,
    interpolator: Arc<dyn Interpolator>,
    left: CurveExtrapolator,
    right: CurveExtrapolator,
}

impl CombinedInterpolator {
    /// Binds the interpolation method to the nodes and pairs it with the extrapolators.
    ///
    /// # Errors
    ///
    /// Returns an error if the nodes are invalid for the interpolation method.
    pub fn bind(
        method: CurveInterpolator,
        left: CurveExtrapolator,
        right: CurveExtrapolator,
        xs: Vec<f64>,
        ys: Vec<f64>,
    ) -> MathResult<Self> {
        let interpolator = method.bind(xs, ys)?;
        log::trace!(
            "bound {} interpolator over {} nodes, extrapolators {}/{}",
            method,
            interpolator.x_values().len(),
            left,
            right
        );
        Ok(Self {
            method,
            interpolator,
            left,
            right,
        })
    }

    /// Returns the interpolation method.
    pub fn method(&self) -> CurveInterpolator {
        self.method
    }

    /// Returns the left extrapolator.
    pub fn left(&self) -> CurveExtrapolator {
        self.left
    }

    /// Returns the right extrapolator.
    pub fn right(&self) -> CurveExtrapolator {
        self.right
    }

    /// Returns the bound interpolator.
    pub fn interpolator(&self) -> &dyn Interpolator {
        self.interpolator.as_ref()
    }

    fn side(&self, x: f64) -> Option<(Boundary, CurveExtrapolator)> {
        if x < self.interpolator.min_x() {
            Some((Boundary::Left, self.left))
        } else if x > self.interpolator.max_x() {
            Some((Boundary::Right, self.right))
        } else {
            None
        }
    }

    /// Returns the value at x.
    pub fn y_value(&self, x: f64) -> MathResult<f64> {
        match self.side(x) {
            Some((side, extrap)) => {
                extrap
                    .extrapolator()
                    .extrapolate(x, side, self.interpolator.as_ref())
            }
            None => self.interpolator.interpolate(x),
        }
    }

    /// Returns the first derivative at x.
    pub fn first_derivative(&self, x: f64) -> MathResult<f64> {
        match self.side(x) {
            Some((side, extrap)) => {
                extrap
                    .extrapolator()
                    .derivative(x, side, self.interpolator.as_ref())
            }
            None => self.interpolator.derivative(x),
        }
    }

    /// Returns the sensitivity of the value at x to each node's y-value.
    pub fn y_value_parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        match self.side(x) {
            Some((side, extrap)) => {
                extrap
                    .extrapolator()
                    .parameter_sensitivity(x, side, self.interpolator.as_ref())
            }
            None => self.interpolator.parameter_sensitivity(x),
        }
    }
}

impl fmt::Debug for CombinedInterpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedInterpolator")
            .field("method", &self.method)
            .field("left", &self.left)
            .field("right", &self.right)
            .field("nodes", &self.interpolator.x_values().len())
            .finish()
    }
}
