//! Natural cubic spline interpolation.

use nalgebra::{DMatrix, DVector};

use super::{check_range, find_segment, validate_nodes, Interpolator};
use crate::error::MathResult;

/// Natural cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives.
///
/// "Natural" means the second derivative is zero at the endpoints. With only
/// two nodes the spline reduces to a straight line.
///
/// The knot second derivatives are linear in the y-values, `y2 = M · y`. The
/// matrix `M` is kept so that parameter sensitivities are exact.
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 4.0, 9.0];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    /// Sensitivity of the knot second derivatives to the y-values
    y2_sensitivity: DMatrix<f64>,
    allow_extrapolation: bool,
}

/// Position of a point within a spline segment.
struct Segment {
    lo: usize,
    h: f64,
    a: f64,
    b: f64,
}

impl CubicSpline {
    /// Creates a natural cubic spline interpolator.
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

        let y2_sensitivity = second_derivative_matrix(&xs);
        let y2s = (&y2_sensitivity * DVector::from_column_slice(&ys))
            .iter()
            .copied()
            .collect();

        Ok(Self {
            xs,
            ys,
            y2s,
            y2_sensitivity,
            allow_extrapolation: false,
        })
    }

    /// Enables extrapolation beyond the data range.
    #[must_use]
    pub fn with_extrapolation(mut self) -> Self {
        self.allow_extrapolation = true;
        self
    }

    fn segment(&self, x: f64) -> MathResult<Segment> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let lo = find_segment(&self.xs, x);
        let h = self.xs[lo + 1] - self.xs[lo];
        Ok(Segment {
            lo,
            h,
            a: (self.xs[lo + 1] - x) / h,
            b: (x - self.xs[lo]) / h,
        })
    }

    /// Adds `scale` times row `row` of the second derivative matrix to `sens`.
    fn add_y2_row(&self, sens: &mut [f64], row: usize, scale: f64) {
        for (s, m) in sens.iter_mut().zip(self.y2_sensitivity.row(row).iter()) {
            *s += scale * m;
        }
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let Segment { lo, h, a, b } = self.segment(x)?;
        let hi = lo + 1;

        // Cubic spline formula
        let y = a * self.ys[lo]
            + b * self.ys[hi]
            + ((a * a * a - a) * self.y2s[lo] + (b * b * b - b) * self.y2s[hi]) * (h * h) / 6.0;

        Ok(y)
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        let Segment { lo, h, a, b } = self.segment(x)?;
        let hi = lo + 1;

        Ok((self.ys[hi] - self.ys[lo]) / h - (3.0 * a * a - 1.0) / 6.0 * h * self.y2s[lo]
            + (3.0 * b * b - 1.0) / 6.0 * h * self.y2s[hi])
    }

    fn parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let Segment { lo, h, a, b } = self.segment(x)?;
        let hi = lo + 1;

        let mut sens = vec![0.0; self.xs.len()];
        sens[lo] += a;
        sens[hi] += b;
        self.add_y2_row(&mut sens, lo, (a * a * a - a) * h * h / 6.0);
        self.add_y2_row(&mut sens, hi, (b * b * b - b) * h * h / 6.0);
        Ok(sens)
    }

    fn derivative_parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        let Segment { lo, h, a, b } = self.segment(x)?;
        let hi = lo + 1;

        let mut sens = vec![0.0; self.xs.len()];
        sens[lo] -= 1.0 / h;
        sens[hi] += 1.0 / h;
        self.add_y2_row(&mut sens, lo, -(3.0 * a * a - 1.0) / 6.0 * h);
        self.add_y2_row(&mut sens, hi, (3.0 * b * b - 1.0) / 6.0 * h);
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

/// Builds the matrix mapping y-values to natural spline second derivatives.
///
/// Column `j` holds the second derivatives of the spline through the unit vector `e_j`.
fn second_derivative_matrix(xs: &[f64]) -> DMatrix<f64> {
    let n = xs.len();
    let columns: Vec<Vec<f64>> = (0..n)
        .map(|j| {
            let mut unit = vec![0.0; n];
            unit[j] = 1.0;
            compute_second_derivatives(xs, &unit)
        })
        .collect();
    DMatrix::from_fn(n, n, |row, col| columns[col][row])
}

/// Computes the second derivatives for natural cubic spline.
fn compute_second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut y2s = vec![0.0; n];
    let mut u = vec![0.0; n - 1];

    // Decomposition loop
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * y2s[i - 1] + 2.0;
        y2s[i] = (sig - 1.0) / p;
        u[i] = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
            - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * u[i] / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    // Natural spline: y2[n-1] = 0
    y2s[n - 1] = 0.0;

    // Back-substitution loop
    for i in (0..n - 1).rev() {
        y2s[i] = y2s[i] * y2s[i + 1] + u[i];
    }

    y2s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cubic_spline_through_points() {
        let xs = vec![0.0, 1.0, 2.0, 3.0];
        let ys = vec![0.0, 1.0, 4.0, 9.0];

        let spline = CubicSpline::new(xs.clone(), ys.clone()).unwrap();

        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(spline.interpolate(*x).unwrap(), *y, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_natural_end_conditions() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 0.0, 1.0]).unwrap();
        assert_relative_eq!(spline.y2s[0], 0.0);
        assert_relative_eq!(spline.y2s[3], 0.0);
    }

    #[test]
    fn test_two_points_is_linear() {
        let spline = CubicSpline::new(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();
        assert_relative_eq!(spline.interpolate(2.0).unwrap(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(spline.derivative(1.5).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reproduces_straight_line() {
        let xs = vec![0.0, 0.5, 2.0, 3.5, 5.0];
        let ys: Vec<f64> = xs.iter().map(|x| 1.0 + 2.0 * x).collect();
        let spline = CubicSpline::new(xs, ys).unwrap();
        for x in [0.25, 1.0, 2.7, 4.9] {
            assert_relative_eq!(spline.interpolate(x).unwrap(), 1.0 + 2.0 * x, epsilon = 1e-12);
            assert_relative_eq!(spline.derivative(x).unwrap(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sensitivities_sum_to_one() {
        let spline = CubicSpline::new(vec![0.0, 1.0, 2.5, 4.0], vec![1.0, 3.0, 2.0, 5.0]).unwrap();
        let sens = spline.parameter_sensitivity(1.7).unwrap();
        assert_relative_eq!(sens.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        let dsens = spline.derivative_parameter_sensitivity(1.7).unwrap();
        assert_relative_eq!(dsens.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }
}
