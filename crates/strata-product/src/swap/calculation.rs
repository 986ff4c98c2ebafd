//! Rate calculations: how the rate of each accrual period is determined.

use log::trace;
use serde::{Deserialize, Serialize};

use strata_basics::{Calendar, DayCount, HolidayCalendar, IborIndex};

use super::{RateAccrualPeriod, RateObservation};
use crate::error::{ProductError, ProductResult};
use crate::schedule::Schedule;

/// A fixed rate applied to every accrual period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedRateCalculation {
    rate: f64,
    day_count: DayCount,
}

impl FixedRateCalculation {
    /// Creates a fixed rate calculation.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidInput` if the rate is not finite.
    pub fn of(rate: f64, day_count: DayCount) -> ProductResult<Self> {
        if !rate.is_finite() {
            return Err(ProductError::invalid_input(format!(
                "fixed rate must be finite, got {rate}"
            )));
        }
        Ok(Self { rate, day_count })
    }

    /// Returns the rate.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the day count.
    #[must_use]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }
}

/// A floating rate observed from an Ibor index, plus a spread.
///
/// Each period's fixing date is `fixing_offset_days` business days of the
/// fixing calendar before the adjusted period start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IborRateCalculation {
    index: IborIndex,
    spread: f64,
    day_count: DayCount,
    fixing_offset_days: i32,
    fixing_calendar: HolidayCalendar,
}

impl IborRateCalculation {
    /// Creates a calculation using the index's day count and fixing offset,
    /// no spread and a Saturday/Sunday fixing calendar.
    #[must_use]
    pub fn of(index: IborIndex) -> Self {
        Self {
            spread: 0.0,
            day_count: index.day_count(),
            fixing_offset_days: index.fixing_offset_days(),
            fixing_calendar: HolidayCalendar::sat_sun(),
            index,
        }
    }

    /// Sets the spread.
    #[must_use]
    pub fn with_spread(mut self, spread: f64) -> Self {
        self.spread = spread;
        self
    }

    /// Sets the accrual day count.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCount) -> Self {
        self.day_count = day_count;
        self
    }

    /// Sets the number of business days between fixing and period start.
    #[must_use]
    pub fn with_fixing_offset_days(mut self, fixing_offset_days: i32) -> Self {
        self.fixing_offset_days = fixing_offset_days;
        self
    }

    /// Sets the calendar the fixing offset is counted in.
    #[must_use]
    pub fn with_fixing_calendar(mut self, fixing_calendar: HolidayCalendar) -> Self {
        self.fixing_calendar = fixing_calendar;
        self
    }

    /// Returns the index.
    #[must_use]
    pub fn index(&self) -> &IborIndex {
        &self.index
    }

    /// Returns the spread.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns the day count.
    #[must_use]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the fixing offset in business days.
    #[must_use]
    pub fn fixing_offset_days(&self) -> i32 {
        self.fixing_offset_days
    }

    /// Returns the fixing calendar.
    #[must_use]
    pub fn fixing_calendar(&self) -> &HolidayCalendar {
        &self.fixing_calendar
    }
}

/// The way the rate of a swap leg is calculated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RateCalculation {
    /// A fixed rate.
    Fixed(FixedRateCalculation),
    /// A rate observed from an Ibor index.
    Ibor(IborRateCalculation),
}

impl RateCalculation {
    /// Returns the day count used for accrual.
    #[must_use]
    pub fn day_count(&self) -> DayCount {
        match self {
            RateCalculation::Fixed(calc) => calc.day_count(),
            RateCalculation::Ibor(calc) => calc.day_count(),
        }
    }

    /// Expands the calculation into one accrual period per schedule period.
    #[must_use]
    pub fn to_expanded(&self, schedule: &Schedule) -> Vec<RateAccrualPeriod> {
        let day_count = self.day_count();
        schedule
            .periods()
            .iter()
            .map(|period| {
                let year_fraction = period.year_fraction(day_count);
                match self {
                    RateCalculation::Fixed(calc) => RateAccrualPeriod::new(
                        *period,
                        year_fraction,
                        RateObservation::Fixed { rate: calc.rate },
                        0.0,
                    ),
                    RateCalculation::Ibor(calc) => {
                        let fixing_date = calc
                            .fixing_calendar
                            .add_business_days(period.start_date(), -calc.fixing_offset_days);
                        trace!("{} fixes on {fixing_date} for {period}", calc.index);
                        RateAccrualPeriod::new(
                            *period,
                            year_fraction,
                            RateObservation::Ibor {
                                index: calc.index.clone(),
                                fixing_date,
                            },
                            calc.spread,
                        )
                    }
                }
            })
            .collect()
    }
}

impl From<FixedRateCalculation> for RateCalculation {
    fn from(calc: FixedRateCalculation) -> Self {
        RateCalculation::Fixed(calc)
    }
}

impl From<IborRateCalculation> for RateCalculation {
    fn from(calc: IborRateCalculation) -> Self {
        RateCalculation::Ibor(calc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{PeriodicSchedule, StubConvention};
    use approx::assert_relative_eq;
    use strata_basics::{BusinessDayAdjustment, Date, Frequency};

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn schedule() -> Schedule {
        PeriodicSchedule::of(
            date(2025, 1, 15),
            date(2026, 1, 15),
            Frequency::Quarterly,
            BusinessDayAdjustment::NONE,
            StubConvention::ShortInitial,
        )
        .unwrap()
        .create_schedule()
        .unwrap()
    }

    #[test]
    fn test_fixed_expansion() {
        let calc: RateCalculation = FixedRateCalculation::of(0.025, DayCount::Act360)
            .unwrap()
            .into();
        let periods = calc.to_expanded(&schedule());

        assert_eq!(periods.len(), 4);
        assert_relative_eq!(periods[0].year_fraction(), 90.0 / 360.0);
        assert_eq!(periods[0].observation().fixed_rate(), Some(0.025));
        assert_relative_eq!(periods[0].fixed_accrual(1.0e6).unwrap(), 6250.0);
    }

    #[test]
    fn test_ibor_fixing_dates() {
        let calc: RateCalculation = IborRateCalculation::of(IborIndex::USD_LIBOR_3M)
            .with_spread(0.001)
            .into();
        let periods = calc.to_expanded(&schedule());

        // 2025-01-15 is a Wednesday; two business days earlier is Monday
        assert_eq!(periods[0].observation().fixing_date(), Some(date(2025, 1, 13)));
        // 2025-04-15 is a Tuesday; two business days earlier is the prior Friday
        assert_eq!(periods[1].observation().fixing_date(), Some(date(2025, 4, 11)));
        assert_eq!(periods[1].spread(), 0.001);
        assert!(periods[1].fixed_accrual(1.0).is_none());
    }

    #[test]
    fn test_invalid_fixed_rate() {
        assert!(FixedRateCalculation::of(f64::INFINITY, DayCount::Act360).is_err());
    }

    #[test]
    fn test_serde_tagged() {
        let calc: RateCalculation = FixedRateCalculation::of(0.03, DayCount::Thirty360)
            .unwrap()
            .into();
        let json = serde_json::to_string(&calc).unwrap();
        assert!(json.contains("\"type\":\"Fixed\""));
        let parsed: RateCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, calc);
    }
}
