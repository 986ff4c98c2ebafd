//! Expanded swap legs.

use serde::Serialize;

use strata_basics::{Currency, Date, PayReceive};

use super::{RatePaymentPeriod, SwapLeg};
use crate::error::{ProductError, ProductResult};

/// A swap leg with every payment and accrual period resolved.
///
/// Produced by [`SwapLeg::to_expanded`]. The leg has at least one payment
/// period and every payment shares one currency. No notional exchange is
/// included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpandedSwapLeg {
    pay_receive: PayReceive,
    payment_periods: Vec<RatePaymentPeriod>,
}

impl ExpandedSwapLeg {
    /// Creates an expanded leg.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidInput` if there are no payment periods
    /// or they mix currencies.
    pub fn of(
        pay_receive: PayReceive,
        payment_periods: Vec<RatePaymentPeriod>,
    ) -> ProductResult<Self> {
        let Some(first) = payment_periods.first() else {
            return Err(ProductError::invalid_input(
                "expanded leg must have at least one payment period",
            ));
        };
        let currency = first.currency();
        if let Some(other) = payment_periods.iter().find(|p| p.currency() != currency) {
            return Err(ProductError::invalid_input(format!(
                "payment periods mix currencies {currency} and {}",
                other.currency()
            )));
        }
        Ok(Self {
            pay_receive,
            payment_periods,
        })
    }

    /// Returns whether the leg pays or receives.
    #[must_use]
    pub fn pay_receive(&self) -> PayReceive {
        self.pay_receive
    }

    /// Returns the payment periods in date order.
    #[must_use]
    pub fn payment_periods(&self) -> &[RatePaymentPeriod] {
        &self.payment_periods
    }

    /// Returns the sum of payment amounts if every rate is known.
    #[must_use]
    pub fn fixed_amount(&self) -> Option<f64> {
        self.payment_periods
            .iter()
            .map(RatePaymentPeriod::fixed_amount)
            .sum()
    }
}

impl SwapLeg for ExpandedSwapLeg {
    fn pay_receive(&self) -> PayReceive {
        self.pay_receive
    }

    fn start_date(&self) -> Date {
        self.payment_periods[0].start_date()
    }

    fn end_date(&self) -> Date {
        self.payment_periods[self.payment_periods.len() - 1].end_date()
    }

    fn currency(&self) -> Currency {
        self.payment_periods[0].currency()
    }

    fn to_expanded(&self) -> ProductResult<ExpandedSwapLeg> {
        Ok(self.clone())
    }
}
