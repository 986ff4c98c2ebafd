//! Swap legs.

use log::debug;
use serde::{Deserialize, Serialize};

use strata_basics::{Currency, Date, PayReceive};

use super::{ExpandedSwapLeg, NotionalAmount, PaymentSchedule, RateCalculation};
use crate::error::{ProductError, ProductResult};
use crate::schedule::PeriodicSchedule;

/// A leg of a swap.
///
/// Every leg can be expanded into an [`ExpandedSwapLeg`] with its payment
/// and accrual periods resolved.
pub trait SwapLeg: Send + Sync {
    /// Returns whether the leg pays or receives.
    fn pay_receive(&self) -> PayReceive;

    /// Returns the adjusted accrual start date.
    fn start_date(&self) -> Date;

    /// Returns the adjusted accrual end date.
    fn end_date(&self) -> Date;

    /// Returns the payment currency.
    fn currency(&self) -> Currency;

    /// Expands the leg into payment periods.
    fn to_expanded(&self) -> ProductResult<ExpandedSwapLeg>;
}

/// A rate swap leg defined by schedules, a notional and a rate calculation.
///
/// # Example
///
/// ```rust
/// use strata_basics::prelude::*;
/// use strata_product::prelude::*;
///
/// let leg = RateSwapLeg::builder()
///     .pay_receive(PayReceive::Pay)
///     .accrual_schedule(
///         PeriodicSchedule::of(
///             Date::from_ymd(2025, 1, 15).unwrap(),
///             Date::from_ymd(2027, 1, 15).unwrap(),
///             Frequency::SemiAnnual,
///             BusinessDayAdjustment::NONE,
///             StubConvention::ShortInitial,
///         )
///         .unwrap(),
///     )
///     .payment_schedule(PaymentSchedule::of(Frequency::SemiAnnual, 0))
///     .notional(NotionalAmount::of(Currency::USD, 1_000_000.0).unwrap())
///     .calculation(FixedRateCalculation::of(0.03, DayCount::Thirty360).unwrap())
///     .build()
///     .unwrap();
///
/// let expanded = leg.to_expanded().unwrap();
/// assert_eq!(expanded.payment_periods().len(), 4);
/// assert_eq!(expanded.payment_periods()[0].notional(), -1_000_000.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateSwapLeg {
    pay_receive: PayReceive,
    accrual_schedule: PeriodicSchedule,
    payment_schedule: PaymentSchedule,
    notional: NotionalAmount,
    calculation: RateCalculation,
}

impl RateSwapLeg {
    /// Creates a leg from its parts.
    #[must_use]
    pub fn of(
        pay_receive: PayReceive,
        accrual_schedule: PeriodicSchedule,
        payment_schedule: PaymentSchedule,
        notional: NotionalAmount,
        calculation: impl Into<RateCalculation>,
    ) -> Self {
        Self {
            pay_receive,
            accrual_schedule,
            payment_schedule,
            notional,
            calculation: calculation.into(),
        }
    }

    /// Returns a builder for creating a leg.
    #[must_use]
    pub fn builder() -> RateSwapLegBuilder {
        RateSwapLegBuilder::default()
    }

    /// Returns a builder initialised with this leg's parts.
    #[must_use]
    pub fn to_builder(&self) -> RateSwapLegBuilder {
        RateSwapLegBuilder {
            pay_receive: Some(self.pay_receive),
            accrual_schedule: Some(self.accrual_schedule.clone()),
            payment_schedule: Some(self.payment_schedule.clone()),
            notional: Some(self.notional),
            calculation: Some(self.calculation.clone()),
        }
    }

    /// Returns the accrual schedule.
    #[must_use]
    pub fn accrual_schedule(&self) -> &PeriodicSchedule {
        &self.accrual_schedule
    }

    /// Returns the payment schedule.
    #[must_use]
    pub fn payment_schedule(&self) -> &PaymentSchedule {
        &self.payment_schedule
    }

    /// Returns the notional.
    #[must_use]
    pub fn notional(&self) -> &NotionalAmount {
        &self.notional
    }

    /// Returns the rate calculation.
    #[must_use]
    pub fn calculation(&self) -> &RateCalculation {
        &self.calculation
    }
}

impl SwapLeg for RateSwapLeg {
    fn pay_receive(&self) -> PayReceive {
        self.pay_receive
    }

    fn start_date(&self) -> Date {
        self.accrual_schedule.adjusted_start_date()
    }

    fn end_date(&self) -> Date {
        self.accrual_schedule.adjusted_end_date()
    }

    fn currency(&self) -> Currency {
        self.notional.currency()
    }

    fn to_expanded(&self) -> ProductResult<ExpandedSwapLeg> {
        let schedule = self.accrual_schedule.create_schedule()?;
        let accrual_periods = self.calculation.to_expanded(&schedule);
        let payment_periods = self.payment_schedule.create_payment_periods(
            &schedule,
            accrual_periods,
            &self.notional,
            self.pay_receive,
        )?;
        debug!(
            "Expanded {} {} leg into {} payments",
            self.pay_receive,
            self.notional.currency(),
            payment_periods.len()
        );
        ExpandedSwapLeg::of(self.pay_receive, payment_periods)
    }
}

/// Builder for [`RateSwapLeg`].
#[derive(Debug, Clone, Default)]
pub struct RateSwapLegBuilder {
    pay_receive: Option<PayReceive>,
    accrual_schedule: Option<PeriodicSchedule>,
    payment_schedule: Option<PaymentSchedule>,
    notional: Option<NotionalAmount>,
    calculation: Option<RateCalculation>,
}

impl RateSwapLegBuilder {
    /// Sets whether the leg pays or receives.
    #[must_use]
    pub fn pay_receive(mut self, pay_receive: PayReceive) -> Self {
        self.pay_receive = Some(pay_receive);
        self
    }

    /// Sets the accrual schedule.
    #[must_use]
    pub fn accrual_schedule(mut self, schedule: PeriodicSchedule) -> Self {
        self.accrual_schedule = Some(schedule);
        self
    }

    /// Sets the payment schedule.
    #[must_use]
    pub fn payment_schedule(mut self, schedule: PaymentSchedule) -> Self {
        self.payment_schedule = Some(schedule);
        self
    }

    /// Sets the notional.
    #[must_use]
    pub fn notional(mut self, notional: NotionalAmount) -> Self {
        self.notional = Some(notional);
        self
    }

    /// Sets the rate calculation.
    #[must_use]
    pub fn calculation(mut self, calculation: impl Into<RateCalculation>) -> Self {
        self.calculation = Some(calculation.into());
        self
    }

    /// Builds the leg.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::MissingField` if a part was not set.
    pub fn build(self) -> ProductResult<RateSwapLeg> {
        Ok(RateSwapLeg {
            pay_receive: self
                .pay_receive
                .ok_or_else(|| ProductError::missing_field("pay_receive"))?,
            accrual_schedule: self
                .accrual_schedule
                .ok_or_else(|| ProductError::missing_field("accrual_schedule"))?,
            payment_schedule: self
                .payment_schedule
                .ok_or_else(|| ProductError::missing_field("payment_schedule"))?,
            notional: self
                .notional
                .ok_or_else(|| ProductError::missing_field("notional"))?,
            calculation: self
                .calculation
                .ok_or_else(|| ProductError::missing_field("calculation"))?,
        })
    }
}
