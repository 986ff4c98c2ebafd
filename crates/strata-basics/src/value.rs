//! Adjustments applied to a single numeric value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An adjustment to a value, used to perturb curve parameters.
///
/// ```rust
/// use strata_basics::ValueAdjustment;
///
/// assert_eq!(ValueAdjustment::Absolute(3.0).apply(5.0), 3.0);
/// assert_eq!(ValueAdjustment::DeltaAmount(2.0).apply(5.0), 7.0);
/// assert_eq!(ValueAdjustment::DeltaMultiplier(0.1).apply(5.0), 5.5);
/// assert_eq!(ValueAdjustment::Multiplier(2.0).apply(5.0), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ValueAdjustment {
    /// Replaces the value.
    Absolute(f64),
    /// Adds an amount to the value.
    DeltaAmount(f64),
    /// Scales the value by `1 + m`.
    DeltaMultiplier(f64),
    /// Scales the value by `m`.
    Multiplier(f64),
}

impl ValueAdjustment {
    /// An adjustment that leaves the value unchanged.
    pub const NONE: ValueAdjustment = ValueAdjustment::DeltaAmount(0.0);

    /// Creates an adjustment that replaces the value.
    #[must_use]
    pub fn of_replace(value: f64) -> Self {
        ValueAdjustment::Absolute(value)
    }

    /// Creates an adjustment that adds an amount.
    #[must_use]
    pub fn of_delta_amount(delta: f64) -> Self {
        ValueAdjustment::DeltaAmount(delta)
    }

    /// Applies the adjustment to a base value.
    #[must_use]
    pub fn apply(&self, base: f64) -> f64 {
        match *self {
            ValueAdjustment::Absolute(value) => value,
            ValueAdjustment::DeltaAmount(delta) => base + delta,
            ValueAdjustment::DeltaMultiplier(m) => base * (1.0 + m),
            ValueAdjustment::Multiplier(m) => base * m,
        }
    }
}

impl fmt::Display for ValueAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueAdjustment::Absolute(v) => write!(f, "={v}"),
            ValueAdjustment::DeltaAmount(v) => write!(f, "+{v}"),
            ValueAdjustment::DeltaMultiplier(v) => write!(f, "*(1+{v})"),
            ValueAdjustment::Multiplier(v) => write!(f, "*{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_none_is_identity() {
        assert_relative_eq!(ValueAdjustment::NONE.apply(4.2), 4.2);
    }

    #[test]
    fn test_serde() {
        let adj = ValueAdjustment::DeltaMultiplier(0.25);
        let json = serde_json::to_string(&adj).unwrap();
        assert_eq!(json, r#"{"type":"DeltaMultiplier","value":0.25}"#);
        let back: ValueAdjustment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, adj);
    }
}
