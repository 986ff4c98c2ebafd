//! Log-linear interpolation.
//!
//! Interpolates the logarithm of values, which is useful for discount factors
//! as it ensures positive values and produces piecewise constant forward rates.

use super::{check_range, find_segment, validate_nodes, Interpolator};
use crate::error::{MathError, MathResult};

/// Log-linear interpolation between data points.
///
/// Interpolates the natural logarithm of y values, then exponentiates the result:
///
/// ```text
/// y(x) = exp(linear_interpolate(x, ln(y)))
/// ```
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::{LogLinearInterpolator, Interpolator};
///
/// // Discount factors at different maturities
/// let times = vec![0.0, 1.0, 2.0, 3.0];
/// let discount_factors = vec![1.0, 0.97, 0.94, 0.91];
///
/// let interp = LogLinearInterpolator::new(times, discount_factors).unwrap();
/// let df = interp.interpolate(1.5).unwrap();
/// assert!(df > 0.0);  // Always positive
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Precomputed ln(y) values
    log_ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - There are fewer than 2 points
    /// - Lengths differ
    /// - Any y value is non-positive
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        validate_nodes(&xs, &ys, 2)?;

        let mut log_ys = Vec::with_capacity(ys.len());
        for (i, &y) in ys.iter().enumerate() {
            if y <= 0.0 {
                return Err(MathError::invalid_input(format!(
                    "log-linear interpolation requires positive values, y[{i}] = {y}"
                )));
            }
            log_ys.push(y.ln());
        }

        Ok(Self {
            xs,
            ys,
            log_ys,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    /// Returns (segment, width, position in segment, log slope, value).
    fn evaluate(&self, x: f64) -> MathResult<(usize, f64, f64, f64, f64)> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let i = find_segment(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let slope = self.log_ys[i + 1] - self.log_ys[i];
        let y = (self.log_ys[i] + t * slope).exp();
        Ok((i, h, t, slope, y))
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        self.evaluate(x).map(|(.., y)| y)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        let (_, h, _, slope, y) = self.evaluate(x)?;
        Ok(y * slope / h)
    }

    fn parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let (i, _, t, _, y) = self.evaluate(x)?;
        let mut sens = vec![0.0; self.xs.len()];
        sens[i] = y * (1.0 - t) / self.ys[i];
        sens[i + 1] = y * t / self.ys[i + 1];
        Ok(sens)
    }

    fn derivative_parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let (i, h, t, slope, y) = self.evaluate(x)?;
        let mut sens = vec![0.0; self.xs.len()];
        sens[i] = y / (self.ys[i] * h) * ((1.0 - t) * slope - 1.0);
        sens[i + 1] = y / (self.ys[i + 1] * h) * (t * slope + 1.0);
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
