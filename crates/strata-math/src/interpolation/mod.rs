//! Interpolation methods for nodal curves.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: Straight lines between nodes
//! - [`LogLinearInterpolator`]: Linear in `ln(y)`, for positive values such as discount factors
//! - [`CubicSpline`]: Natural cubic spline, C2 continuous
//! - [`DoubleQuadratic`]: Weighted blend of the two quadratics around each interval
//!
//! | Method | Smoothness | Positive y required | Use Case |
//! |--------|------------|---------------------|----------|
//! | Linear | C0 | No | Zero rates, quick prototyping |
//! | Log-Linear | C0 | **Yes** | Discount factor curves |
//! | Cubic Spline | C2 | No | Smooth curves |
//! | Double Quadratic | C1 | No | Smooth curves with local support |
//!
//! Every interpolator also reports the sensitivity of the interpolated value,
//! and of its first derivative, to each node's y-value.

mod cubic_spline;
mod double_quadratic;
mod linear;
mod log_linear;

pub use cubic_spline::CubicSpline;
pub use double_quadratic::DoubleQuadratic;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods bound to a set of nodes.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync + fmt::Debug {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the first derivative at x.
    fn derivative(&self, x: f64) -> MathResult<f64>;

    /// Returns the sensitivity of the value at x to each node's y-value.
    fn parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>>;

    /// Returns the sensitivity of the first derivative at x to each node's y-value.
    fn derivative_parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>>;

    /// Returns the node x-values.
    fn x_values(&self) -> &[f64];

    /// Returns the node y-values.
    fn y_values(&self) -> &[f64];

    /// Returns true if extrapolation is allowed.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64 {
        self.x_values()[0]
    }

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64 {
        let xs = self.x_values();
        xs[xs.len() - 1]
    }

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Selects an interpolation method independently of any data.
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::CurveInterpolator;
///
/// let interp = CurveInterpolator::Linear
///     .bind(vec![1.0, 2.0, 3.0], vec![5.0, 7.0, 8.0])
///     .unwrap();
/// assert_eq!(interp.interpolate(1.5).unwrap(), 6.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurveInterpolator {
    /// Linear interpolation
    #[default]
    Linear,
    /// Log-linear interpolation
    LogLinear,
    /// Natural cubic spline
    NaturalCubicSpline,
    /// Double quadratic
    DoubleQuadratic,
}

impl CurveInterpolator {
    /// Returns the name of the method.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CurveInterpolator::Linear => "Linear",
            CurveInterpolator::LogLinear => "LogLinear",
            CurveInterpolator::NaturalCubicSpline => "NaturalCubicSpline",
            CurveInterpolator::DoubleQuadratic => "DoubleQuadratic",
        }
    }

    /// Binds the method to node data.
    ///
    /// # Errors
    ///
    /// Returns an error if the nodes are invalid for the method.
    pub fn bind(&self, xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Arc<dyn Interpolator>> {
        Ok(match self {
            CurveInterpolator::Linear => Arc::new(LinearInterpolator::new(xs, ys)?),
            CurveInterpolator::LogLinear => Arc::new(LogLinearInterpolator::new(xs, ys)?),
            CurveInterpolator::NaturalCubicSpline => Arc::new(CubicSpline::new(xs, ys)?),
            CurveInterpolator::DoubleQuadratic => Arc::new(DoubleQuadratic::new(xs, ys)?),
        })
    }
}

impl fmt::Display for CurveInterpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Validates node data shared by all interpolators.
pub(crate) fn validate_nodes(xs: &[f64], ys: &[f64], required: usize) -> MathResult<()> {
    if xs.len() < required {
        return Err(MathError::insufficient_data(required, xs.len()));
    }
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if let Some(bad) = xs.iter().chain(ys.iter()).find(|v| !v.is_finite()) {
        return Err(MathError::invalid_input(format!(
            "node values must be finite, found {bad}"
        )));
    }

    // Check that xs are sorted
    for i in 1..xs.len() {
        if xs[i] <= xs[i - 1] {
            return Err(MathError::invalid_input(
                "x values must be strictly increasing",
            ));
        }
    }
    Ok(())
}

/// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the end segments.
pub(crate) fn find_segment(xs: &[f64], x: f64) -> usize {
    match xs.binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)) {
        Ok(i) => i.min(xs.len() - 2),
        Err(i) => (i.saturating_sub(1)).min(xs.len() - 2),
    }
}

/// Rejects points outside the node range unless extrapolation is allowed.
pub(crate) fn check_range(xs: &[f64], x: f64, allow_extrapolation: bool) -> MathResult<()> {
    let (min, max) = (xs[0], xs[xs.len() - 1]);
    if x.is_nan() || (!allow_extrapolation && (x < min || x > max)) {
        return Err(MathError::ExtrapolationNotAllowed { x, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [CurveInterpolator; 4] = [
        CurveInterpolator::Linear,
        CurveInterpolator::LogLinear,
        CurveInterpolator::NaturalCubicSpline,
        CurveInterpolator::DoubleQuadratic,
    ];

    #[test]
    fn test_all_interpolators_through_points() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let dfs: Vec<f64> = times.iter().map(|t: &f64| (-0.03 * t).exp()).collect();

        for method in ALL {
            let interp = method.bind(times.clone(), dfs.clone()).unwrap();
            for (t, df) in times.iter().zip(dfs.iter()) {
                assert_relative_eq!(interp.interpolate(*t).unwrap(), *df, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let xs = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let ys = vec![0.99, 0.97, 0.94, 0.92, 0.85];
        let h = 1e-6;

        for method in ALL {
            let interp = method.bind(xs.clone(), ys.clone()).unwrap();
            for x in [0.7, 1.4, 2.5, 4.1] {
                let fd = (interp.interpolate(x + h).unwrap() - interp.interpolate(x - h).unwrap())
                    / (2.0 * h);
                assert_relative_eq!(interp.derivative(x).unwrap(), fd, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_sensitivities_match_bumped_nodes() {
        let xs = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let ys = vec![0.99, 0.97, 0.94, 0.92, 0.85];
        let shift = 1e-7;

        for method in ALL {
            let base = method.bind(xs.clone(), ys.clone()).unwrap();
            for x in [0.6, 1.7, 2.0, 4.5] {
                let sens = base.parameter_sensitivity(x).unwrap();
                let dsens = base.derivative_parameter_sensitivity(x).unwrap();
                assert_eq!(sens.len(), xs.len());
                for i in 0..xs.len() {
                    let mut bumped = ys.clone();
                    bumped[i] += shift;
                    let other = method.bind(xs.clone(), bumped).unwrap();
                    let fd = (other.interpolate(x).unwrap() - base.interpolate(x).unwrap()) / shift;
                    assert_relative_eq!(sens[i], fd, epsilon = 1e-5);
                    let fd = (other.derivative(x).unwrap() - base.derivative(x).unwrap()) / shift;
                    assert_relative_eq!(dsens[i], fd, epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_validation() {
        for method in ALL {
            assert!(matches!(
                method.bind(vec![1.0], vec![1.0]),
                Err(MathError::InsufficientData { .. })
            ));
            assert!(method.bind(vec![1.0, 2.0], vec![1.0]).is_err());
            assert!(method.bind(vec![2.0, 1.0], vec![1.0, 1.0]).is_err());
            assert!(method.bind(vec![1.0, f64::NAN], vec![1.0, 1.0]).is_err());
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CurveInterpolator::NaturalCubicSpline).unwrap();
        assert_eq!(json, "\"NaturalCubicSpline\"");
        assert_eq!(CurveInterpolator::LogLinear.to_string(), "LogLinear");
    }
}
