//! Double quadratic interpolation.

use super::{check_range, find_segment, validate_nodes, Interpolator};
use crate::error::MathResult;

/// Double quadratic interpolation.
///
/// On each interior interval `[x_i, x_{i+1}]` two quadratics are fitted, one
/// through nodes `i-1, i, i+1` and one through `i, i+1, i+2`. The result is
/// their blend, weighted linearly across the interval:
///
/// ```text
/// w = (x_{i+1} - x) / (x_{i+1} - x_i)
/// y(x) = w · q_left(x) + (1 - w) · q_right(x)
/// ```
///
/// The first and last intervals use the single quadratic available. With two
/// nodes the method is linear. The result is linear in the y-values, so
/// sensitivities are the blending weights.
///
/// # Example
///
/// ```rust
/// use strata_math::interpolation::{DoubleQuadratic, Interpolator};
///
/// // Nodes on a parabola are reproduced exactly
/// let xs = vec![0.0, 1.0, 2.0, 3.0, 4.0];
/// let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
///
/// let interp = DoubleQuadratic::new(xs, ys).unwrap();
/// assert!((interp.interpolate(2.5).unwrap() - 6.25).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct DoubleQuadratic {
    xs: Vec<f64>,
    ys: Vec<f64>,
    allow_extrapolation: bool,
}

impl DoubleQuadratic {
    /// Creates a new double quadratic interpolator.
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

    /// Returns the weight of each node in the value and in the first derivative at x.
    fn weights(&self, x: f64) -> MathResult<(Vec<f64>, Vec<f64>)> {
        check_range(&self.xs, x, self.allow_extrapolation)?;
        let n = self.xs.len();
        let i = find_segment(&self.xs, x);
        let mut value = vec![0.0; n];
        let mut slope = vec![0.0; n];

        if n == 2 {
            let h = self.xs[1] - self.xs[0];
            let t = (x - self.xs[0]) / h;
            value[0] = 1.0 - t;
            value[1] = t;
            slope[0] = -1.0 / h;
            slope[1] = 1.0 / h;
            return Ok((value, slope));
        }

        if i == 0 || i == n - 2 {
            let first = if i == 0 { 0 } else { n - 3 };
            let (qv, qd) = quadratic_weights(&self.xs[first..first + 3], x);
            for k in 0..3 {
                value[first + k] = qv[k];
                slope[first + k] = qd[k];
            }
            return Ok((value, slope));
        }

        let h = self.xs[i + 1] - self.xs[i];
        let w = (self.xs[i + 1] - x) / h;
        let dw = -1.0 / h;
        let (lv, ld) = quadratic_weights(&self.xs[i - 1..i + 2], x);
        let (rv, rd) = quadratic_weights(&self.xs[i..i + 3], x);
        for k in 0..3 {
            value[i - 1 + k] += w * lv[k];
            slope[i - 1 + k] += dw * lv[k] + w * ld[k];
            value[i + k] += (1.0 - w) * rv[k];
            slope[i + k] += -dw * rv[k] + (1.0 - w) * rd[k];
        }
        Ok((value, slope))
    }

    fn dot(&self, weights: &[f64]) -> f64 {
        weights.iter().zip(&self.ys).map(|(w, y)| w * y).sum()
    }
}

/// Lagrange basis weights of the quadratic through three nodes, and their derivatives.
fn quadratic_weights(nodes: &[f64], x: f64) -> ([f64; 3], [f64; 3]) {
    let mut value = [0.0; 3];
    let mut slope = [0.0; 3];
    for k in 0..3 {
        let (a, b) = match k {
            0 => (nodes[1], nodes[2]),
            1 => (nodes[0], nodes[2]),
            _ => (nodes[0], nodes[1]),
        };
        let denom = (nodes[k] - a) * (nodes[k] - b);
        value[k] = (x - a) * (x - b) / denom;
        slope[k] = (2.0 * x - a - b) / denom;
    }
    (value, slope)
}

impl Interpolator for DoubleQuadratic {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let (value, _) = self.weights(x)?;
        Ok(self.dot(&value))
    }

    fn derivative(&self, x: f64) -> MathResult<f64> {
        let (_, slope) = self.weights(x)?;
        Ok(self.dot(&slope))
    }

    fn parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        self.weights(x).map(|(value, _)| value)
    }

    fn derivative_parameter_sensitivity(&self, x: f64) -> MathResult<Vec<f64>> {
        self.weights(x).map(|(_, slope)| slope)
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
    use approx::assert_relative_eq;

    #[test]
    fn test_reproduces_quadratic() {
        let xs = vec![0.0, 0.5, 1.5, 3.0, 4.0];
        let ys: Vec<f64> = xs.iter().map(|x| 2.0 - x + 0.5 * x * x).collect();
        let interp = DoubleQuadratic::new(xs, ys).unwrap();

        for x in [0.2, 1.0, 2.2, 3.7] {
            assert_relative_eq!(
                interp.interpolate(x).unwrap(),
                2.0 - x + 0.5 * x * x,
                epsilon = 1e-12
            );
            assert_relative_eq!(interp.derivative(x).unwrap(), -1.0 + x, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_two_points_is_linear() {
        let interp = DoubleQuadratic::new(vec![1.0, 2.0], vec![5.0, 7.0]).unwrap();
        assert_relative_eq!(interp.interpolate(1.5).unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(interp.derivative(1.2).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_through_nodes() {
        let xs = vec![0.0, 2.0, 3.0];
        let ys = vec![3.0, 5.0, 6.0];
        let interp = DoubleQuadratic::new(xs.clone(), ys.clone()).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert_relative_eq!(interp.interpolate(*x).unwrap(), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let interp =
            DoubleQuadratic::new(vec![0.0, 1.0, 2.0, 4.0, 7.0], vec![1.0, 2.0, 2.5, 2.0, 3.0])
                .unwrap();
        let sens = interp.parameter_sensitivity(2.9).unwrap();
        assert_relative_eq!(sens.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        let dsens = interp.derivative_parameter_sensitivity(2.9).unwrap();
        assert_relative_eq!(dsens.iter().sum::<f64>(), 0.0, epsilon = 1e-12);
    }
}
