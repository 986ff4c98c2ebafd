//! Core traits for parameterized curves.
//!
//! [`Curve`] is the general contract: a function of a single `f64` whose
//! shape is fixed by a list of parameters. [`NodalCurve`] refines it for
//! curves whose parameters are the y-values of a set of nodes.

use strata_basics::ValueAdjustment;

use super::metadata::{CurveMetadata, ParameterMetadata};
use super::name::CurveName;
use crate::error::MarketResult;

/// A curve defined by a list of parameters.
///
/// Curves are immutable; every mutator returns a new curve.
///
/// # Example
///
/// ```rust
/// use strata_market::prelude::*;
/// use strata_math::CurveInterpolator;
///
/// let curve = InterpolatedNodalCurve::of(
///     "Test",
///     vec![1.0, 2.0, 3.0],
///     vec![5.0, 7.0, 8.0],
///     CurveInterpolator::Linear,
/// )
/// .unwrap();
///
/// let bumped = curve.with_perturbation(&|_, value, _| value + 1.0).unwrap();
/// assert_eq!(bumped.y_value(2.0).unwrap(), 8.0);
/// ```
pub trait Curve: Send + Sync {
    /// Returns the curve metadata.
    fn metadata(&self) -> &CurveMetadata;

    /// Returns the curve name.
    fn name(&self) -> &CurveName {
        self.metadata().name()
    }

    /// Returns the number of parameters.
    fn parameter_count(&self) -> usize;

    /// Returns the value of parameter `index`.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::IndexOutOfBounds` if `index >= parameter_count()`.
    fn parameter(&self, index: usize) -> MarketResult<f64>;

    /// Returns the description of parameter `index`.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::IndexOutOfBounds` if `index >= parameter_count()`.
    fn parameter_metadata(&self, index: usize) -> MarketResult<ParameterMetadata>;

    /// Returns a copy with parameter `index` replaced.
    fn with_parameter(&self, index: usize, value: f64) -> MarketResult<Self>
    where
        Self: Sized;

    /// Returns a copy with every parameter passed through `perturbation`.
    ///
    /// The function receives the parameter index, its current value and its
    /// description, and returns the new value.
    fn with_perturbation(
        &self,
        perturbation: &dyn Fn(usize, f64, &ParameterMetadata) -> f64,
    ) -> MarketResult<Self>
    where
        Self: Sized;

    /// Returns the curve value at `x`.
    fn y_value(&self, x: f64) -> MarketResult<f64>;

    /// Returns the first derivative of the curve at `x`.
    fn first_derivative(&self, x: f64) -> MarketResult<f64>;

    /// Returns `∂y(x)/∂p_i` for every parameter `p_i`.
    fn y_value_parameter_sensitivity(&self, x: f64) -> MarketResult<Vec<f64>>;
}

/// A curve whose parameters are the y-values at a set of strictly increasing x-values.
pub trait NodalCurve: Curve {
    /// Returns the node x-values.
    fn x_values(&self) -> &[f64];

    /// Returns the node y-values.
    fn y_values(&self) -> &[f64];

    /// Returns a copy with the y-values replaced.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidInput` if the length differs from the node count.
    fn with_y_values(&self, y_values: Vec<f64>) -> MarketResult<Self>
    where
        Self: Sized;

    /// Returns a copy with a node inserted at `index`, dropping parameter metadata.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::InvalidInput` if `index` exceeds the node count or
    /// if `x` breaks the strict ordering of the x-values.
    fn with_node(&self, index: usize, x: f64, y: f64) -> MarketResult<Self>
    where
        Self: Sized;

    /// Returns a copy with a described node inserted at `index`.
    ///
    /// If the curve carries parameter metadata, `metadata` is inserted at the
    /// same index; otherwise the curve metadata is left unchanged.
    fn with_node_metadata(
        &self,
        index: usize,
        metadata: ParameterMetadata,
        x: f64,
        y: f64,
    ) -> MarketResult<Self>
    where
        Self: Sized;

    /// Returns a copy with every y-value replaced by `shift(x_i, y_i)`.
    fn shifted_by(&self, shift: &dyn Fn(f64, f64) -> f64) -> MarketResult<Self>
    where
        Self: Sized;

    /// Returns a copy with adjustment `i` applied to y-value `i`.
    ///
    /// Nodes without an adjustment are unchanged; surplus adjustments are ignored.
    fn shifted_by_adjustments(&self, adjustments: &[ValueAdjustment]) -> MarketResult<Self>
    where
        Self: Sized;
}
