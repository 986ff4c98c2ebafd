//! Descriptive metadata attached to curves and their parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use strata_basics::{Date, Tenor};

use super::name::CurveName;

/// Describes a single curve parameter, typically a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParameterMetadata {
    /// No description.
    #[default]
    Empty,
    /// A free-form label.
    Simple {
        /// The label.
        label: String,
    },
    /// A node placed at a tenor, with its date.
    Tenor {
        /// The node date.
        date: Date,
        /// The node tenor.
        tenor: Tenor,
    },
}

impl ParameterMetadata {
    /// Creates a labelled parameter.
    #[must_use]
    pub fn simple(label: impl Into<String>) -> Self {
        ParameterMetadata::Simple {
            label: label.into(),
        }
    }

    /// Creates a tenor parameter.
    #[must_use]
    pub fn tenor(date: Date, tenor: Tenor) -> Self {
        ParameterMetadata::Tenor { date, tenor }
    }

    /// Returns a human readable label.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ParameterMetadata::Empty => String::new(),
            ParameterMetadata::Simple { label } => label.clone(),
            ParameterMetadata::Tenor { tenor, .. } => tenor.to_string(),
        }
    }

    /// Returns `count` empty entries.
    #[must_use]
    pub fn list_of_empty(count: usize) -> Vec<ParameterMetadata> {
        vec![ParameterMetadata::Empty; count]
    }
}

impl fmt::Display for ParameterMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Metadata of a curve: its name and, optionally, one entry per parameter.
///
/// Anything naming a curve converts into metadata, so constructors accept
/// `impl Into<CurveMetadata>`:
///
/// ```rust
/// use strata_market::curve::{CurveMetadata, CurveName};
///
/// let from_str: CurveMetadata = "USD-Disc".into();
/// let from_name: CurveMetadata = CurveName::of("USD-Disc").into();
/// assert_eq!(from_str, from_name);
/// assert!(from_str.parameters().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveMetadata {
    name: CurveName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<Vec<ParameterMetadata>>,
}

impl CurveMetadata {
    /// Creates metadata without parameter descriptions.
    #[must_use]
    pub fn of(name: impl Into<CurveName>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
        }
    }

    /// Returns a copy with the given parameter descriptions.
    #[must_use]
    pub fn with_parameters(&self, parameters: Vec<ParameterMetadata>) -> Self {
        Self {
            name: self.name.clone(),
            parameters: Some(parameters),
        }
    }

    /// Returns a copy without parameter descriptions.
    #[must_use]
    pub fn without_parameters(&self) -> Self {
        Self::of(self.name.clone())
    }

    /// Returns the curve name.
    #[must_use]
    pub fn name(&self) -> &CurveName {
        &self.name
    }

    /// Returns the parameter descriptions, if any.
    #[must_use]
    pub fn parameters(&self) -> Option<&[ParameterMetadata]> {
        self.parameters.as_deref()
    }

    /// Returns the description of parameter `index`, or [`ParameterMetadata::Empty`].
    #[must_use]
    pub fn parameter(&self, index: usize) -> ParameterMetadata {
        self.parameters
            .as_ref()
            .and_then(|params| params.get(index))
            .cloned()
            .unwrap_or_default()
    }
}

impl From<CurveName> for CurveMetadata {
    fn from(name: CurveName) -> Self {
        Self::of(name)
    }
}

impl From<&str> for CurveMetadata {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}

impl From<String> for CurveMetadata {
    fn from(name: String) -> Self {
        Self::of(name)
    }
}

impl From<&CurveMetadata> for CurveMetadata {
    fn from(metadata: &CurveMetadata) -> Self {
        metadata.clone()
    }
}
