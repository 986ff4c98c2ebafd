//! Payment periods and the payment schedule that creates them.

use log::debug;
use serde::{Deserialize, Serialize};

use strata_basics::{Calendar, Currency, Date, Frequency, HolidayCalendar, PayReceive};

use super::{NotionalAmount, RateAccrualPeriod};
use crate::error::{ProductError, ProductResult};
use crate::schedule::Schedule;

/// A payment made at the end of one or more accrual periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatePaymentPeriod {
    payment_date: Date,
    accrual_periods: Vec<RateAccrualPeriod>,
    currency: Currency,
    notional: f64,
}

impl RatePaymentPeriod {
    /// Creates a payment period.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidInput` if there are no accrual periods.
    pub fn new(
        payment_date: Date,
        accrual_periods: Vec<RateAccrualPeriod>,
        currency: Currency,
        notional: f64,
    ) -> ProductResult<Self> {
        if accrual_periods.is_empty() {
            return Err(ProductError::invalid_input(
                "payment period must contain at least one accrual period",
            ));
        }
        Ok(Self {
            payment_date,
            accrual_periods,
            currency,
            notional,
        })
    }

    /// Returns the payment date.
    #[must_use]
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Returns the accrual periods paid on the payment date.
    #[must_use]
    pub fn accrual_periods(&self) -> &[RateAccrualPeriod] {
        &self.accrual_periods
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the signed notional: negative when paying.
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Returns the start date of the first accrual period.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.accrual_periods[0].start_date()
    }

    /// Returns the end date of the last accrual period.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.accrual_periods[self.accrual_periods.len() - 1].end_date()
    }

    /// Returns the total year fraction of the accrual periods.
    #[must_use]
    pub fn year_fraction(&self) -> f64 {
        self.accrual_periods
            .iter()
            .map(RateAccrualPeriod::year_fraction)
            .sum()
    }

    /// Returns the payment amount if every accrual period has a known rate.
    #[must_use]
    pub fn fixed_amount(&self) -> Option<f64> {
        self.accrual_periods
            .iter()
            .map(|accrual| accrual.fixed_accrual(self.notional))
            .sum()
    }
}

/// The date a payment is made relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentRelativeTo {
    /// Payment is relative to the start of the payment period.
    PeriodStart,
    /// Payment is relative to the end of the payment period.
    #[default]
    PeriodEnd,
}

/// Defines how accrual periods are grouped into payments.
///
/// The payment frequency must be an exact multiple of the accrual frequency;
/// a quarterly payment over monthly accrual pays three periods at a time.
/// The payment lag is counted in business days of the payment calendar,
/// which has no holidays unless one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    payment_frequency: Frequency,
    #[serde(default)]
    payment_lag_days: i32,
    #[serde(default)]
    payment_relative_to: PaymentRelativeTo,
    #[serde(default)]
    payment_calendar: HolidayCalendar,
}

impl PaymentSchedule {
    /// Creates a payment schedule paying at the end of each payment period
    /// plus a lag in days.
    #[must_use]
    pub fn of(payment_frequency: Frequency, payment_lag_days: i32) -> Self {
        Self {
            payment_frequency,
            payment_lag_days,
            payment_relative_to: PaymentRelativeTo::PeriodEnd,
            payment_calendar: HolidayCalendar::no_holidays(),
        }
    }

    /// Sets the date payments are relative to.
    #[must_use]
    pub fn with_relative_to(mut self, relative_to: PaymentRelativeTo) -> Self {
        self.payment_relative_to = relative_to;
        self
    }

    /// Sets the calendar the payment lag is counted in.
    #[must_use]
    pub fn with_calendar(mut self, calendar: HolidayCalendar) -> Self {
        self.payment_calendar = calendar;
        self
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn payment_frequency(&self) -> Frequency {
        self.payment_frequency
    }

    /// Returns the payment lag in business days.
    #[must_use]
    pub fn payment_lag_days(&self) -> i32 {
        self.payment_lag_days
    }

    /// Returns the date payments are relative to.
    #[must_use]
    pub fn payment_relative_to(&self) -> PaymentRelativeTo {
        self.payment_relative_to
    }

    /// Returns the number of accrual periods in each payment period.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidSchedule` if the payment frequency is not
    /// a multiple of the accrual frequency.
    pub fn periods_per_payment(&self, schedule: &Schedule) -> ProductResult<usize> {
        if self.payment_frequency.is_term() {
            return Ok(schedule.len().max(1));
        }
        self.payment_frequency
            .exact_multiple_of(schedule.frequency())
            .ok_or_else(|| {
                ProductError::invalid_schedule(format!(
                    "payment frequency {} is not a multiple of accrual frequency {}",
                    self.payment_frequency,
                    schedule.frequency()
                ))
            })
    }

    /// Groups accrual periods into payment periods.
    ///
    /// A trailing group shorter than the payment frequency becomes a stub
    /// payment. Amounts carry the sign of `pay_receive`.
    ///
    /// # Errors
    ///
    /// Returns an error if the accrual periods do not match the schedule or
    /// the frequencies are incompatible.
    pub fn create_payment_periods(
        &self,
        schedule: &Schedule,
        accrual_periods: Vec<RateAccrualPeriod>,
        notional: &NotionalAmount,
        pay_receive: PayReceive,
    ) -> ProductResult<Vec<RatePaymentPeriod>> {
        if accrual_periods.len() != schedule.len() {
            return Err(ProductError::invalid_input(format!(
                "expected {} accrual periods, got {}",
                schedule.len(),
                accrual_periods.len()
            )));
        }
        let group_size = self.periods_per_payment(schedule)?;
        let signed_notional = notional.signed_amount(pay_receive);

        let payments = accrual_periods
            .chunks(group_size)
            .map(|group| {
                let anchor = match self.payment_relative_to {
                    PaymentRelativeTo::PeriodStart => group[0].start_date(),
                    PaymentRelativeTo::PeriodEnd => group[group.len() - 1].end_date(),
                };
                let payment_date = self
                    .payment_calendar
                    .add_business_days(anchor, self.payment_lag_days);
                RatePaymentPeriod::new(
                    payment_date,
                    group.to_vec(),
                    notional.currency(),
                    signed_notional,
                )
            })
            .collect::<ProductResult<Vec<_>>>()?;

        debug!(
            "Grouped {} accrual periods into {} {} payments",
            schedule.len(),
            payments.len(),
            self.payment_frequency
        );
        Ok(payments)
    }
}
