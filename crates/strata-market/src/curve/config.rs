//! Serializable configuration form of a nodal curve.
//!
//! [`InterpolatedNodalCurve`] serializes through [`CurveConfig`], so a curve
//! read from JSON goes through the same validation as one built in code.
//!
//! ```json
//! {
//!   "name": "USD-Disc",
//!   "interpolator": "LogLinear",
//!   "extrapolator_right": "Exponential",
//!   "nodes": [
//!     { "x": 1.0, "y": 0.99 },
//!     { "x": 2.0, "y": 0.97 }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use strata_math::{CurveExtrapolator, CurveInterpolator};

use super::interpolated_nodal::InterpolatedNodalCurve;
use super::metadata::{CurveMetadata, ParameterMetadata};
use super::name::CurveName;
use super::traits::{Curve, NodalCurve};
use crate::error::{MarketError, MarketResult};

/// A single curve node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Node x-value.
    pub x: f64,
    /// Node y-value.
    pub y: f64,
    /// Optional node description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ParameterMetadata>,
}

impl NodeConfig {
    /// Creates a node without description.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, metadata: None }
    }
}

/// Configuration of an interpolated nodal curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Curve name.
    pub name: CurveName,

    /// Curve nodes in increasing x order.
    pub nodes: Vec<NodeConfig>,

    /// Interpolation method.
    #[serde(default)]
    pub interpolator: CurveInterpolator,

    /// Extrapolation below the first node.
    #[serde(default)]
    pub extrapolator_left: CurveExtrapolator,

    /// Extrapolation above the last node.
    #[serde(default)]
    pub extrapolator_right: CurveExtrapolator,
}

impl CurveConfig {
    /// Creates a configuration with default methods.
    pub fn new(name: impl Into<CurveName>, nodes: Vec<NodeConfig>) -> Self {
        Self {
            name: name.into(),
            nodes,
            interpolator: CurveInterpolator::default(),
            extrapolator_left: CurveExtrapolator::default(),
            extrapolator_right: CurveExtrapolator::default(),
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Config` if the text is not a valid configuration.
    pub fn from_json(json: &str) -> MarketResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Config` if serialization fails.
    pub fn to_json(&self) -> MarketResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Builds the curve described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if only some nodes carry metadata, or if the nodes
    /// are invalid for a curve.
    pub fn build(&self) -> MarketResult<InterpolatedNodalCurve> {
        InterpolatedNodalCurve::try_from(self.clone())
    }
}

impl TryFrom<CurveConfig> for InterpolatedNodalCurve {
    type Error = MarketError;

    fn try_from(config: CurveConfig) -> Result<Self, Self::Error> {
        let described = config.nodes.iter().filter(|n| n.metadata.is_some()).count();
        if described != 0 && described != config.nodes.len() {
            return Err(MarketError::invalid_input(format!(
                "Curve '{}': {} of {} nodes carry metadata; expected all or none",
                config.name,
                described,
                config.nodes.len()
            )));
        }
        let mut metadata = CurveMetadata::of(config.name);
        let mut x_values = Vec::with_capacity(config.nodes.len());
        let mut y_values = Vec::with_capacity(config.nodes.len());
        let mut parameters = Vec::with_capacity(described);
        for node in config.nodes {
            x_values.push(node.x);
            y_values.push(node.y);
            parameters.extend(node.metadata);
        }
        if described > 0 {
            metadata = metadata.with_parameters(parameters);
        }
        InterpolatedNodalCurve::of_extrapolated(
            metadata,
            x_values,
            y_values,
            config.interpolator,
            config.extrapolator_left,
            config.extrapolator_right,
        )
    }
}

impl From<InterpolatedNodalCurve> for CurveConfig {
    fn from(curve: InterpolatedNodalCurve) -> Self {
        let parameters = curve.metadata().parameters();
        let nodes = curve
            .x_values()
            .iter()
            .zip(curve.y_values())
            .enumerate()
            .map(|(i, (&x, &y))| NodeConfig {
                x,
                y,
                metadata: parameters.and_then(|p| p.get(i)).cloned(),
            })
            .collect();
        CurveConfig {
            name: curve.name().clone(),
            nodes,
            interpolator: curve.interpolator(),
            extrapolator_left: curve.extrapolator_left(),
            extrapolator_right: curve.extrapolator_right(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let json = r#"{"name":"Test","nodes":[{"x":1.0,"y":5.0},{"x":2.0,"y":7.0}]}"#;
        let config = CurveConfig::from_json(json).unwrap();
        assert_eq!(config.interpolator, CurveInterpolator::Linear);
        assert_eq!(config.extrapolator_left, CurveExtrapolator::Flat);
        let curve = config.build().unwrap();
        assert_eq!(curve.y_value(1.5).unwrap(), 6.0);
    }

    #[test]
    fn test_mixed_metadata_rejected() {
        let mut config = CurveConfig::new(
            "Test",
            vec![NodeConfig::new(1.0, 5.0), NodeConfig::new(2.0, 7.0)],
        );
        config.nodes[0].metadata = Some(ParameterMetadata::simple("1Y"));
        assert!(config.build().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_curve_serde_round_trip() {
        let curve = InterpolatedNodalCurve::of_extrapolated(
            CurveMetadata::of("Test").with_parameters(vec![
                ParameterMetadata::simple("1Y"),
                ParameterMetadata::simple("2Y"),
                ParameterMetadata::simple("3Y"),
            ]),
            vec![1.0, 2.0, 3.0],
            vec![5.0, 7.0, 8.0],
            CurveInterpolator::LogLinear,
            CurveExtrapolator::Linear,
            CurveExtrapolator::Exponential,
        )
        .unwrap();
        let json = serde_json::to_string(&curve).unwrap();
        let parsed: InterpolatedNodalCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, curve);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = CurveConfig::from_json("{").unwrap_err();
        assert!(matches!(err, MarketError::Config { .. }));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"name":"Test","nodes":[{"x":2.0,"y":5.0},{"x":1.0,"y":7.0}]}"#;
        assert!(serde_json::from_str::<InterpolatedNodalCurve>(json).is_err());
    }
}
