//! Generated schedules and their periods.

use serde::{Deserialize, Serialize};
use std::fmt;

use strata_basics::{DayCount, Date, Frequency};

/// A single period of a schedule.
///
/// The unadjusted dates are the rolled dates before business day adjustment;
/// the adjusted dates are the ones accrual is calculated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchedulePeriod {
    start_date: Date,
    end_date: Date,
    unadjusted_start_date: Date,
    unadjusted_end_date: Date,
}

impl SchedulePeriod {
    /// Creates a period from adjusted and unadjusted dates.
    #[must_use]
    pub fn new(
        start_date: Date,
        end_date: Date,
        unadjusted_start_date: Date,
        unadjusted_end_date: Date,
    ) -> Self {
        Self {
            start_date,
            end_date,
            unadjusted_start_date,
            unadjusted_end_date,
        }
    }

    /// Creates a period where adjusted and unadjusted dates coincide.
    #[must_use]
    pub fn of_unadjusted(start_date: Date, end_date: Date) -> Self {
        Self::new(start_date, end_date, start_date, end_date)
    }

    /// Returns the adjusted start date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the adjusted end date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the unadjusted start date.
    #[must_use]
    pub fn unadjusted_start_date(&self) -> Date {
        self.unadjusted_start_date
    }

    /// Returns the unadjusted end date.
    #[must_use]
    pub fn unadjusted_end_date(&self) -> Date {
        self.unadjusted_end_date
    }

    /// Returns the number of calendar days between the adjusted dates.
    #[must_use]
    pub fn length_in_days(&self) -> i64 {
        self.start_date.days_between(&self.end_date)
    }

    /// Returns the year fraction between the adjusted dates.
    #[must_use]
    pub fn year_fraction(&self, day_count: DayCount) -> f64 {
        day_count.year_fraction(self.start_date, self.end_date)
    }
}

impl fmt::Display for SchedulePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_date, self.end_date)
    }
}

/// A generated schedule: a contiguous, non-empty list of periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    frequency: Frequency,
    periods: Vec<SchedulePeriod>,
}

impl Schedule {
    pub(crate) fn new(frequency: Frequency, periods: Vec<SchedulePeriod>) -> Self {
        Self { frequency, periods }
    }

    /// Returns the frequency the schedule was generated with.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the periods in date order.
    #[must_use]
    pub fn periods(&self) -> &[SchedulePeriod] {
        &self.periods
    }

    /// Returns the period at an index.
    #[must_use]
    pub fn period(&self, index: usize) -> Option<&SchedulePeriod> {
        self.periods.get(index)
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns true if the schedule has no periods.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns true if the schedule consists of a single period.
    #[must_use]
    pub fn is_single_period(&self) -> bool {
        self.periods.len() == 1
    }

    /// Returns the adjusted start date of the first period.
    #[must_use]
    pub fn start_date(&self) -> Option<Date> {
        self.periods.first().map(SchedulePeriod::start_date)
    }

    /// Returns the adjusted end date of the last period.
    #[must_use]
    pub fn end_date(&self) -> Option<Date> {
        self.periods.last().map(SchedulePeriod::end_date)
    }

    /// Returns every adjusted boundary date, start of the first period included.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        let mut dates = Vec::with_capacity(self.periods.len() + 1);
        if let Some(first) = self.periods.first() {
            dates.push(first.start_date);
        }
        dates.extend(self.periods.iter().map(SchedulePeriod::end_date));
        dates
    }

    /// Returns every unadjusted boundary date.
    #[must_use]
    pub fn unadjusted_dates(&self) -> Vec<Date> {
        let mut dates = Vec::with_capacity(self.periods.len() + 1);
        if let Some(first) = self.periods.first() {
            dates.push(first.unadjusted_start_date);
        }
        dates.extend(self.periods.iter().map(SchedulePeriod::unadjusted_end_date));
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_period_accessors() {
        let period = SchedulePeriod::new(
            date(2025, 1, 15),
            date(2025, 7, 15),
            date(2025, 1, 15),
            date(2025, 7, 13),
        );
        assert_eq!(period.length_in_days(), 181);
        assert_relative_eq!(period.year_fraction(DayCount::Act360), 181.0 / 360.0);
        assert_eq!(period.unadjusted_end_date(), date(2025, 7, 13));
        assert_eq!(period.to_string(), "2025-01-15 to 2025-07-15");
    }

    #[test]
    fn test_schedule_dates() {
        let schedule = Schedule::new(
            Frequency::SemiAnnual,
            vec![
                SchedulePeriod::of_unadjusted(date(2025, 1, 15), date(2025, 7, 15)),
                SchedulePeriod::of_unadjusted(date(2025, 7, 15), date(2026, 1, 15)),
            ],
        );
        assert_eq!(schedule.len(), 2);
        assert_eq!(
            schedule.dates(),
            vec![date(2025, 1, 15), date(2025, 7, 15), date(2026, 1, 15)]
        );
        assert_eq!(schedule.start_date(), Some(date(2025, 1, 15)));
        assert_eq!(schedule.end_date(), Some(date(2026, 1, 15)));
        assert!(!schedule.is_single_period());
    }
}
