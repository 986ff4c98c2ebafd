//! Nodal curves backed by a combined interpolator and extrapolator.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strata_basics::ValueAdjustment;
use strata_math::{CombinedInterpolator, CurveExtrapolator, CurveInterpolator};

use super::config::CurveConfig;
use super::metadata::{CurveMetadata, ParameterMetadata};
use super::traits::{Curve, NodalCurve};
use crate::error::{MarketError, MarketResult};

/// The minimum number of nodes of a nodal curve.
pub const MIN_NODES: usize = 2;

/// A nodal curve interpolated between its nodes and extrapolated beyond them.
///
/// The left and right extrapolators are chosen independently; [`of`](Self::of)
/// uses flat extrapolation on both sides.
///
/// # Invariants
///
/// - at least two nodes
/// - x-values strictly increasing
/// - one y-value per x-value, and one parameter description per node when
///   the metadata carries descriptions
///
/// # Example
///
/// ```rust
/// use strata_market::prelude::*;
/// use strata_math::{CurveExtrapolator, CurveInterpolator};
///
/// let curve = InterpolatedNodalCurve::of_extrapolated(
///     "USD-Disc",
///     vec![1.0, 2.0, 3.0],
///     vec![5.0, 7.0, 8.0],
///     CurveInterpolator::Linear,
///     CurveExtrapolator::Flat,
///     CurveExtrapolator::Linear,
/// )
/// .unwrap();
///
/// assert_eq!(curve.y_value(2.0).unwrap(), 7.0);
/// assert_eq!(curve.y_value(0.0).unwrap(), 5.0);
/// assert_eq!(curve.y_value(4.0).unwrap(), 9.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CurveConfig", into = "CurveConfig")]
pub struct InterpolatedNodalCurve {
    metadata: CurveMetadata,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    bound: CombinedInterpolator,
}

impl InterpolatedNodalCurve {
    /// Creates a curve with flat extrapolation on both sides.
    ///
    /// # Errors
    ///
    /// Returns an error if the node lists differ in length, hold fewer than two
    /// nodes, disagree with the parameter metadata, or are not strictly increasing.
    pub fn of(
        metadata: impl Into<CurveMetadata>,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
        interpolator: CurveInterpolator,
    ) -> MarketResult<Self> {
        Self::of_extrapolated(
            metadata,
            x_values,
            y_values,
            interpolator,
            CurveExtrapolator::Flat,
            CurveExtrapolator::Flat,
        )
    }

    /// Creates a curve with explicit left and right extrapolators.
    ///
    /// # Errors
    ///
    /// See [`of`](Self::of).
    pub fn of_extrapolated(
        metadata: impl Into<CurveMetadata>,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
        interpolator: CurveInterpolator,
        extrapolator_left: CurveExtrapolator,
        extrapolator_right: CurveExtrapolator,
    ) -> MarketResult<Self> {
        let metadata = metadata.into();
        validate_nodes(&metadata, &x_values, &y_values)?;
        let bound = CombinedInterpolator::bind(
            interpolator,
            extrapolator_left,
            extrapolator_right,
            x_values.clone(),
            y_values.clone(),
        )?;
        Ok(Self {
            metadata,
            x_values,
            y_values,
            bound,
        })
    }

    /// Returns a builder with default settings.
    #[must_use]
    pub fn builder() -> InterpolatedNodalCurveBuilder {
        InterpolatedNodalCurveBuilder::default()
    }

    /// Returns a builder initialized from this curve.
    #[must_use]
    pub fn to_builder(&self) -> InterpolatedNodalCurveBuilder {
        InterpolatedNodalCurveBuilder {
            metadata: Some(self.metadata.clone()),
            x_values: self.x_values.clone(),
            y_values: self.y_values.clone(),
            interpolator: self.interpolator(),
            extrapolator_left: self.extrapolator_left(),
            extrapolator_right: self.extrapolator_right(),
        }
    }

    /// Returns the interpolation method.
    #[must_use]
    pub fn interpolator(&self) -> CurveInterpolator {
        self.bound.method()
    }

    /// Returns the extrapolator used below the first node.
    #[must_use]
    pub fn extrapolator_left(&self) -> CurveExtrapolator {
        self.bound.left()
    }

    /// Returns the extrapolator used above the last node.
    #[must_use]
    pub fn extrapolator_right(&self) -> CurveExtrapolator {
        self.bound.right()
    }

    /// Rebuilds the curve with new nodes and metadata, keeping the methods.
    fn rebuild(
        &self,
        metadata: CurveMetadata,
        x_values: Vec<f64>,
        y_values: Vec<f64>,
    ) -> MarketResult<Self> {
        Self::of_extrapolated(
            metadata,
            x_values,
            y_values,
            self.interpolator(),
            self.extrapolator_left(),
            self.extrapolator_right(),
        )
    }

    fn node_index(&self, x: f64) -> Option<usize> {
        self.x_values
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Less))
            .ok()
    }

    fn check_index(&self, index: usize) -> MarketResult<()> {
        if index < self.x_values.len() {
            Ok(())
        } else {
            Err(MarketError::index_out_of_bounds(index, self.x_values.len()))
        }
    }

    fn inserted(&self, index: usize, x: f64, y: f64) -> MarketResult<(Vec<f64>, Vec<f64>)> {
        if index > self.x_values.len() {
            return Err(MarketError::invalid_input(format!(
                "Node index {} is greater than the node count {}",
                index,
                self.x_values.len()
            )));
        }
        let mut x_values = self.x_values.clone();
        let mut y_values = self.y_values.clone();
        x_values.insert(index, x);
        y_values.insert(index, y);
        Ok((x_values, y_values))
    }
}

fn validate_nodes(
    metadata: &CurveMetadata,
    x_values: &[f64],
    y_values: &[f64],
) -> MarketResult<()> {
    if x_values.len() != y_values.len() {
        return Err(MarketError::invalid_input(format!(
            "Length of x-values ({}) must match length of y-values ({})",
            x_values.len(),
            y_values.len()
        )));
    }
    if x_values.len() < MIN_NODES {
        return Err(MarketError::insufficient_points(MIN_NODES, x_values.len()));
    }
    if let Some(parameters) = metadata.parameters() {
        if parameters.len() != x_values.len() {
            return Err(MarketError::invalid_input(format!(
                "Length of parameter metadata ({}) must match the node count ({})",
                parameters.len(),
                x_values.len()
            )));
        }
    }
    for (i, pair) in x_values.windows(2).enumerate() {
        if pair[1] <= pair[0] || pair[1].is_nan() {
            return Err(MarketError::non_monotonic_nodes(i + 1, pair[0], pair[1]));
        }
    }
    Ok(())
}

impl Curve for InterpolatedNodalCurve {
    fn metadata(&self) -> &CurveMetadata {
        &self.metadata
    }

    fn parameter_count(&self) -> usize {
        self.x_values.len()
    }

    fn parameter(&self, index: usize) -> MarketResult<f64> {
        self.check_index(index)?;
        Ok(self.y_values[index])
    }

    fn parameter_metadata(&self, index: usize) -> MarketResult<ParameterMetadata> {
        self.check_index(index)?;
        Ok(self.metadata.parameter(index))
    }

    fn with_parameter(&self, index: usize, value: f64) -> MarketResult<Self> {
        self.check_index(index)?;
        let mut y_values = self.y_values.clone();
        y_values[index] = value;
        self.with_y_values(y_values)
    }

    fn with_perturbation(
        &self,
        perturbation: &dyn Fn(usize, f64, &ParameterMetadata) -> f64,
    ) -> MarketResult<Self> {
        let y_values = self
            .y_values
            .iter()
            .enumerate()
            .map(|(i, &y)| perturbation(i, y, &self.metadata.parameter(i)))
            .collect();
        self.with_y_values(y_values)
    }

    fn y_value(&self, x: f64) -> MarketResult<f64> {
        if let Some(i) = self.node_index(x) {
            return Ok(self.y_values[i]);
        }
        Ok(self.bound.y_value(x)?)
    }

    fn first_derivative(&self, x: f64) -> MarketResult<f64> {
        Ok(self.bound.first_derivative(x)?)
    }

    fn y_value_parameter_sensitivity(&self, x: f64) -> MarketResult<Vec<f64>> {
        Ok(self.bound.y_value_parameter_sensitivity(x)?)
    }
}

impl NodalCurve for InterpolatedNodalCurve {
    fn x_values(&self) -> &[f64] {
        &self.x_values
    }

    fn y_values(&self) -> &[f64] {
        &self.y_values
    }

    fn with_y_values(&self, y_values: Vec<f64>) -> MarketResult<Self> {
        if y_values.len() != self.y_values.len() {
            return Err(MarketError::invalid_input(format!(
                "Length of y-values ({}) must match the node count ({})",
                y_values.len(),
                self.y_values.len()
            )));
        }
        self.rebuild(self.metadata.clone(), self.x_values.clone(), y_values)
    }

    fn with_node(&self, index: usize, x: f64, y: f64) -> MarketResult<Self> {
        let (x_values, y_values) = self.inserted(index, x, y)?;
        self.rebuild(self.metadata.without_parameters(), x_values, y_values)
    }

    fn with_node_metadata(
        &self,
        index: usize,
        metadata: ParameterMetadata,
        x: f64,
        y: f64,
    ) -> MarketResult<Self> {
        let (x_values, y_values) = self.inserted(index, x, y)?;
        let curve_metadata = match self.metadata.parameters() {
            Some(parameters) => {
                let mut parameters = parameters.to_vec();
                parameters.insert(index, metadata);
                self.metadata.with_parameters(parameters)
            }
            None => self.metadata.clone(),
        };
        self.rebuild(curve_metadata, x_values, y_values)
    }

    fn shifted_by(&self, shift: &dyn Fn(f64, f64) -> f64) -> MarketResult<Self> {
        let y_values = self
            .x_values
            .iter()
            .zip(&self.y_values)
            .map(|(&x, &y)| shift(x, y))
            .collect();
        self.with_y_values(y_values)
    }

    fn shifted_by_adjustments(&self, adjustments: &[ValueAdjustment]) -> MarketResult<Self> {
        if adjustments.len() != self.y_values.len() {
            log::debug!(
                "curve {}: applying {} adjustments to {} nodes",
                self.metadata.name(),
                adjustments.len(),
                self.y_values.len()
            );
        }
        let mut y_values = self.y_values.clone();
        for (y, adjustment) in y_values.iter_mut().zip(adjustments) {
            *y = adjustment.apply(*y);
        }
        self.with_y_values(y_values)
    }
}

impl PartialEq for InterpolatedNodalCurve {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata
            && self.x_values == other.x_values
            && self.y_values == other.y_values
            && self.interpolator() == other.interpolator()
            && self.extrapolator_left() == other.extrapolator_left()
            && self.extrapolator_right() == other.extrapolator_right()
    }
}

/// Builder for [`InterpolatedNodalCurve`].
///
/// Methods default to linear interpolation with flat extrapolation.
#[derive(Debug, Clone, Default)]
pub struct InterpolatedNodalCurveBuilder {
    metadata: Option<CurveMetadata>,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    interpolator: CurveInterpolator,
    extrapolator_left: CurveExtrapolator,
    extrapolator_right: CurveExtrapolator,
}

impl InterpolatedNodalCurveBuilder {
    /// Sets the curve metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: impl Into<CurveMetadata>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    /// Sets the node x-values.
    #[must_use]
    pub fn x_values(mut self, x_values: impl Into<Vec<f64>>) -> Self {
        self.x_values = x_values.into();
        self
    }

    /// Sets the node y-values.
    #[must_use]
    pub fn y_values(mut self, y_values: impl Into<Vec<f64>>) -> Self {
        self.y_values = y_values.into();
        self
    }

    /// Sets the interpolation method.
    #[must_use]
    pub fn interpolator(mut self, interpolator: CurveInterpolator) -> Self {
        self.interpolator = interpolator;
        self
    }

    /// Sets the extrapolator used below the first node.
    #[must_use]
    pub fn extrapolator_left(mut self, extrapolator: CurveExtrapolator) -> Self {
        self.extrapolator_left = extrapolator;
        self
    }

    /// Sets the extrapolator used above the last node.
    #[must_use]
    pub fn extrapolator_right(mut self, extrapolator: CurveExtrapolator) -> Self {
        self.extrapolator_right = extrapolator;
        self
    }

    /// Builds the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata is not set or the nodes are invalid.
    pub fn build(self) -> MarketResult<InterpolatedNodalCurve> {
        let metadata = self
            .metadata
            .ok_or_else(|| MarketError::invalid_input("Curve metadata must be set"))?;
        InterpolatedNodalCurve::of_extrapolated(
            metadata,
            self.x_values,
            self.y_values,
            self.interpolator,
            self.extrapolator_left,
            self.extrapolator_right,
        )
    }
}
