//! Parameterized curves.
//!
//! - [`Curve`] / [`NodalCurve`]: Curve contracts
//! - [`InterpolatedNodalCurve`]: Nodes joined by an interpolator, extended by extrapolators
//! - [`CurveMetadata`] / [`ParameterMetadata`]: Names and node descriptions
//! - [`CurveConfig`]: Serializable configuration form

mod config;
mod interpolated_nodal;
mod metadata;
mod name;
mod traits;

pub use config::{CurveConfig, NodeConfig};
pub use interpolated_nodal::{InterpolatedNodalCurve, InterpolatedNodalCurveBuilder, MIN_NODES};
pub use metadata::{CurveMetadata, ParameterMetadata};
pub use name::CurveName;
pub use traits::{Curve, NodalCurve};
