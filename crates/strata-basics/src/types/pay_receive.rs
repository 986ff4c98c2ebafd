//! Direction of a payment stream.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a leg pays or receives its cash flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayReceive {
    /// Amounts are paid, represented as negative values.
    Pay,
    /// Amounts are received, represented as positive values.
    Receive,
}

impl PayReceive {
    /// Creates an instance from a signed amount; negative amounts are paid.
    #[must_use]
    pub fn of_signed_amount(amount: f64) -> Self {
        if amount.is_sign_negative() {
            PayReceive::Pay
        } else {
            PayReceive::Receive
        }
    }

    /// Normalizes the sign of an amount: negative when paying, positive when receiving.
    #[must_use]
    pub fn normalize(&self, amount: f64) -> f64 {
        match self {
            PayReceive::Pay => -amount.abs(),
            PayReceive::Receive => amount.abs(),
        }
    }

    /// Returns true if this is `Pay`.
    #[must_use]
    pub fn is_pay(&self) -> bool {
        matches!(self, PayReceive::Pay)
    }
}

impl fmt::Display for PayReceive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayReceive::Pay => write!(f, "Pay"),
            PayReceive::Receive => write!(f, "Receive"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(PayReceive::Pay.normalize(100.0), -100.0);
        assert_eq!(PayReceive::Pay.normalize(-100.0), -100.0);
        assert_eq!(PayReceive::Receive.normalize(-100.0), 100.0);
    }

    #[test]
    fn test_of_signed_amount() {
        assert_eq!(PayReceive::of_signed_amount(-1.0), PayReceive::Pay);
        assert_eq!(PayReceive::of_signed_amount(0.0), PayReceive::Receive);
        assert!(PayReceive::Pay.is_pay());
    }
}
