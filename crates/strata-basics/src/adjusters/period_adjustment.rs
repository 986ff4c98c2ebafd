//! Period addition followed by business day adjustment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::PeriodAdditionConvention;
use crate::calendars::BusinessDayAdjustment;
use crate::error::{StrataError, StrataResult};
use crate::types::{Date, Period};

/// An adjustment that adds a period to a date and then rolls the result to a
/// business day.
///
/// The period is added using the [`PeriodAdditionConvention`], with the
/// calendar of the business day adjustment supplying business days where the
/// convention needs them. The [`BusinessDayAdjustment`] is then applied to the
/// unadjusted result.
///
/// # Example
///
/// ```rust
/// use strata_basics::prelude::*;
///
/// let adj = PeriodAdjustment::of_last_day(
///     Period::of_months(1),
///     BusinessDayAdjustment::NONE,
/// )
/// .unwrap();
///
/// let end_feb = Date::from_ymd(2014, 2, 28).unwrap();
/// assert_eq!(adj.adjust(end_feb).unwrap(), Date::from_ymd(2014, 3, 31).unwrap());
/// assert_eq!(adj.to_string(), "P1M with LastDay");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodAdjustmentData")]
pub struct PeriodAdjustment {
    period: Period,
    addition_convention: PeriodAdditionConvention,
    adjustment: BusinessDayAdjustment,
}

#[derive(Deserialize)]
struct PeriodAdjustmentData {
    period: Period,
    #[serde(default)]
    addition_convention: PeriodAdditionConvention,
    #[serde(default)]
    adjustment: BusinessDayAdjustment,
}

impl TryFrom<PeriodAdjustmentData> for PeriodAdjustment {
    type Error = StrataError;

    fn try_from(data: PeriodAdjustmentData) -> Result<Self, Self::Error> {
        PeriodAdjustment::of(data.period, data.addition_convention, data.adjustment)
    }
}

impl PeriodAdjustment {
    /// An adjustment that returns the input date.
    pub const NONE: PeriodAdjustment = PeriodAdjustment {
        period: Period::ZERO,
        addition_convention: PeriodAdditionConvention::None,
        adjustment: BusinessDayAdjustment::NONE,
    };

    /// Creates an adjustment from its three parts.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidInput` if the convention is month-based
    /// and the period has a non-zero number of days.
    pub fn of(
        period: Period,
        addition_convention: PeriodAdditionConvention,
        adjustment: BusinessDayAdjustment,
    ) -> StrataResult<Self> {
        if addition_convention.is_month_based() && period.days() != 0 {
            return Err(StrataError::invalid_input(format!(
                "period must not contain days when the addition convention is month-based: \
                 {period} with {addition_convention}"
            )));
        }
        Ok(Self {
            period,
            addition_convention,
            adjustment,
        })
    }

    /// Creates an adjustment using the [`PeriodAdditionConvention::LastDay`] convention.
    pub fn of_last_day(period: Period, adjustment: BusinessDayAdjustment) -> StrataResult<Self> {
        Self::of(period, PeriodAdditionConvention::LastDay, adjustment)
    }

    /// Creates an adjustment using the [`PeriodAdditionConvention::LastBusinessDay`] convention.
    pub fn of_last_business_day(
        period: Period,
        adjustment: BusinessDayAdjustment,
    ) -> StrataResult<Self> {
        Self::of(period, PeriodAdditionConvention::LastBusinessDay, adjustment)
    }

    /// Returns the period to add.
    #[must_use]
    pub fn period(&self) -> Period {
        self.period
    }

    /// Returns the addition convention.
    #[must_use]
    pub fn addition_convention(&self) -> PeriodAdditionConvention {
        self.addition_convention
    }

    /// Returns the business day adjustment applied after the addition.
    #[must_use]
    pub fn adjustment(&self) -> &BusinessDayAdjustment {
        &self.adjustment
    }

    /// Adjusts the date: adds the period, then applies the business day adjustment.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the result is outside the
    /// supported date range.
    pub fn adjust(&self, date: Date) -> StrataResult<Date> {
        let unadjusted =
            self.addition_convention
                .adjust(date, self.period, self.adjustment.calendar())?;
        Ok(self.adjustment.adjust(unadjusted))
    }
}

impl Default for PeriodAdjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for PeriodAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.period)?;
        if self.addition_convention != PeriodAdditionConvention::None {
            write!(f, " with {}", self.addition_convention)?;
        }
        if self.adjustment != BusinessDayAdjustment::NONE {
            write!(f, " then apply {}", self.adjustment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{BusinessDayConvention, HolidayCalendar};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_none_returns_input() {
        let d = date(2014, 8, 16);
        assert_eq!(PeriodAdjustment::NONE.adjust(d).unwrap(), d);
        assert_eq!(PeriodAdjustment::NONE.to_string(), "P0D");
    }

    #[test]
    fn test_plain_addition() {
        let adj = PeriodAdjustment::of(
            Period::of_years(5),
            PeriodAdditionConvention::None,
            BusinessDayAdjustment::NONE,
        )
        .unwrap();
        let d = date(2014, 8, 15);
        assert_eq!(adj.adjust(d).unwrap(), d.plus(Period::of_years(5)).unwrap());
        assert_eq!(adj.to_string(), "P5Y");
    }

    #[test]
    fn test_month_based_with_days_fails() {
        let bad = PeriodAdjustment::of_last_day(Period::of(0, 1, 5), BusinessDayAdjustment::NONE);
        assert!(matches!(bad, Err(StrataError::InvalidInput { .. })));
        let bad = PeriodAdjustment::of_last_business_day(
            Period::of_days(3),
            BusinessDayAdjustment::NONE,
        );
        assert!(bad.is_err());
        assert!(PeriodAdjustment::of(
            Period::of_days(3),
            PeriodAdditionConvention::None,
            BusinessDayAdjustment::NONE
        )
        .is_ok());
    }

    #[test]
    fn test_business_day_applied_after_addition() {
        let bda =
            BusinessDayAdjustment::of(BusinessDayConvention::Following, HolidayCalendar::sat_sun());
        let adj = PeriodAdjustment::of(Period::of_months(1), PeriodAdditionConvention::None, bda)
            .unwrap();
        // 2014-08-04 + 1M = 2014-09-04 (Thursday)
        assert_eq!(adj.adjust(date(2014, 8, 4)).unwrap(), date(2014, 9, 4));
        // 2014-08-06 + 1M = 2014-09-06 (Saturday) -> Monday
        assert_eq!(adj.adjust(date(2014, 8, 6)).unwrap(), date(2014, 9, 8));
        assert_eq!(adj.to_string(), "P1M then apply Following using calendar Sat/Sun");
    }

    #[test]
    fn test_last_business_day_uses_adjustment_calendar() {
        let bda =
            BusinessDayAdjustment::of(BusinessDayConvention::Following, HolidayCalendar::sat_sun());
        let adj = PeriodAdjustment::of_last_business_day(Period::of_months(1), bda).unwrap();
        // 2014-07-31 is the last business day of July; 2014-08-29 is the last of August
        assert_eq!(adj.adjust(date(2014, 7, 31)).unwrap(), date(2014, 8, 29));
    }

    #[test]
    fn test_serde_validates() {
        let adj = PeriodAdjustment::of_last_day(Period::of_months(3), BusinessDayAdjustment::NONE)
            .unwrap();
        let json = serde_json::to_string(&adj).unwrap();
        let back: PeriodAdjustment = serde_json::from_str(&json).unwrap();
        assert_eq!(adj, back);

        let bad = r#"{"period":"P1M2D","addition_convention":"LastDay"}"#;
        assert!(serde_json::from_str::<PeriodAdjustment>(bad).is_err());
    }
}
