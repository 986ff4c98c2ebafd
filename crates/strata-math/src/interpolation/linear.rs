//! Linear interpolation.

use super::{check_range, find_segment, validate_nodes, Interpolator};
use crate::error::MathResult;

/// Linear interpolation between data points.
///
/// The simplest form of interpolation, connecting consecutive points
/// with straight lines.
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::{LinearInterpolator, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let interp = LinearInterpolator::new(xs, ys).unwrap();
/// let y = interp.interpolate(1.5).unwrap();
/// // y = 2.5 (linear interpolation between (1, 1) and (2, 4))
/// assert_eq!(y, 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be sorted in ascending order)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points or if lengths differ.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, 2)?;
        Ok(Self {
            xs,
            ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Returns the segment index and the segment width.
    fn segment(&self, x: f64) -> MathResult<(usize, f64)> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let i = find_segment(&self.xs, x);
        Ok((i, self.xs[i + 1] - self.xs[i]))
    }
}

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let (i, h) = self.segment(x)?;
        let t = (x - self.xs[i]) / h;
        Ok(self.ys[i] + t * (self.ys[i + 1] - self.ys[i]))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        let (i, h) = self.segment(x)?;
        Ok((self.ys[i + 1] - self.ys[i]) / h)
    }

    fn parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let (i, h) = self.segment(x)?;
        let t = (x - self.xs[i]) / h;
        let mut sens = vec![0.0; self.xs.len()];
        sens[i] = 1.0 - t;
        sens[i + 1] = t;
        Ok(sens)
    }

    fn derivative_parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let (i, h) = self.segment(x)?;
        let mut sens = vec![0.0; self.xs.len()];
        sens[i] = -1.0 / h;
        sens[i + 1] = 1.0 / h;
        Ok(sens)
    }

    fn x_values(&self) -> &[f64] {
        &self.xs
    }

    fn y_values(&self) -> &[f64] {
        &self.ys
    }

    fn allows_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_interpolation() {
        let xs = vec![0.0, 1.0, 2.0];
        let ys = vec![0.0, 2.0, 4.0];

        let interp = LinearInterpolator::new(xs, ys).unwrap();

        // Test at exact points
        assert_relative_eq!(interp.interpolate(0.0).unwrap(), 0.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.0).unwrap(), 2.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-10);

        // Test interpolation
        assert_relative_eq!(interp.interpolate(0.5).unwrap(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_extrapolation_disabled() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0]).unwrap();

        assert!(matches!(
            interp.interpolate(-0.5),
            Err(MathError::ExtrapolationNotAllowed { .. })
        ));
        assert!(interp.interpolate(2.5).is_err());
        assert!(interp.parameter_sensitivity(2.5).is_err());
    }

    #[test]
    fn test_extrapolation_enabled() {
        let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 2.0])
            .unwrap()
            .with_extrapolation();

        // Should extrapolate linearly
        assert_relative_eq!(interp.interpolate(-1.0).unwrap(), -1.0, epsilon = 1e-10);
        assert_relative_eq!(interp.interpolate(3.0).unwrap(), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_sensitivity_weights() {
        let interp = LinearInterpolator::new(vec![1.0, 2.0, 3.0], vec![5.0, 7.0, 8.0]).unwrap();
        let sens = interp.parameter_sensitivity(2.25).unwrap();
        assert_relative_eq!(sens[0], 0.0);
        assert_relative_eq!(sens[1], 0.75);
        assert_relative_eq!(sens[2], 0.25);

        let dsens = interp.derivative_parameter_sensitivity(2.25).unwrap();
        assert_relative_eq!(dsens[1], -1.0);
        assert_relative_eq!(dsens[2], 1.0);
    }
}
