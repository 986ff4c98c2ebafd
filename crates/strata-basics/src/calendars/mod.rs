//! Holiday calendars and business day conventions.
//!
//! This module provides:
//! - The [`Calendar`] trait for business day queries
//! - [`HolidayCalendar`], an immutable weekend and holiday definition
//! - [`BusinessDayConvention`] and [`BusinessDayAdjustment`] for date rolling

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;

mod adjustment;
mod conventions;

pub use adjustment::BusinessDayAdjustment;
pub use conventions::BusinessDayConvention;

use crate::types::Date;

/// Trait for business day calendars.
///
/// Calendars determine which days are business days vs holidays
/// for a specific market or jurisdiction.
pub trait Calendar: Send + Sync {
    /// Returns the calendar identifier.
    fn id(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or weekend.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Returns the business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }

    /// Returns the business day on or before the given date.
    fn previous_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(-1);
        }
        result
    }

    /// Returns the last business day of the date's month.
    fn last_business_day_of_month(&self, date: Date) -> Date {
        self.previous_business_day(date.end_of_month())
    }

    /// Returns true if the date is the last business day of its month.
    fn is_last_business_day_of_month(&self, date: Date) -> bool {
        self.is_business_day(date) && self.last_business_day_of_month(date) == date
    }

    /// Advances a date by a number of business days.
    ///
    /// Negative amounts move backwards. A zero amount returns the input.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }

    /// Counts business days between two dates (exclusive of start, inclusive of end).
    fn business_days_between(&self, start: Date, end: Date) -> i32 {
        let mut count = 0;
        let mut current = start.add_days(1);

        while current <= end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }

        count
    }
}

/// Weekend definitions for different markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekendType {
    /// Saturday and Sunday (most markets)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (Middle East markets)
    FridaySaturday,
    /// Sunday only
    SundayOnly,
    /// No weekends
    None,
}

impl WeekendType {
    /// Returns the weekend as a bit mask, bit 0 being Monday.
    #[must_use]
    pub const fn mask(&self) -> u8 {
        match self {
            WeekendType::SaturdaySunday => 0b110_0000,
            WeekendType::FridaySaturday => 0b011_0000,
            WeekendType::SundayOnly => 0b100_0000,
            WeekendType::None => 0,
        }
    }

    /// Check if a weekday is a weekend day for this type.
    #[must_use]
    pub fn is_weekend(&self, weekday: chrono::Weekday) -> bool {
        self.mask() & weekday_bit(weekday) != 0
    }
}

fn weekday_bit(weekday: chrono::Weekday) -> u8 {
    1 << weekday.num_days_from_monday()
}

/// An immutable holiday calendar.
///
/// A calendar is a weekend definition plus a set of explicit holiday dates.
/// Two calendars can be joined with [`HolidayCalendar::combined_with`], in which
/// case a date is a holiday if either calendar treats it as one.
///
/// # Example
///
/// ```rust
/// use strata_basics::calendars::{Calendar, HolidayCalendar, WeekendType};
/// use strata_basics::types::Date;
///
/// let new_year = Date::from_ymd(2025, 1, 1).unwrap();
/// let cal = HolidayCalendar::new("GBLO", WeekendType::SaturdaySunday, [new_year]);
///
/// assert!(!cal.is_business_day(new_year));
/// assert!(cal.is_business_day(Date::from_ymd(2025, 1, 2).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HolidayCalendar {
    id: Cow<'static, str>,
    weekend_mask: u8,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// A calendar where every day is a business day.
    pub const NO_HOLIDAYS: HolidayCalendar = HolidayCalendar {
        id: Cow::Borrowed("NoHolidays"),
        weekend_mask: WeekendType::None.mask(),
        holidays: BTreeSet::new(),
    };

    /// A calendar where Saturday and Sunday are the only holidays.
    pub const SAT_SUN: HolidayCalendar = HolidayCalendar {
        id: Cow::Borrowed("Sat/Sun"),
        weekend_mask: WeekendType::SaturdaySunday.mask(),
        holidays: BTreeSet::new(),
    };

    /// Creates a calendar from a weekend definition and explicit holidays.
    pub fn new(
        id: impl Into<String>,
        weekend: WeekendType,
        holidays: impl IntoIterator<Item = Date>,
    ) -> Self {
        Self {
            id: Cow::Owned(id.into()),
            weekend_mask: weekend.mask(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Returns the calendar where every day is a business day.
    #[must_use]
    pub fn no_holidays() -> Self {
        Self::NO_HOLIDAYS
    }

    /// Returns the Saturday/Sunday weekend calendar.
    #[must_use]
    pub fn sat_sun() -> Self {
        Self::SAT_SUN
    }

    /// Returns the explicit holiday dates.
    pub fn holidays(&self) -> impl Iterator<Item = &Date> {
        self.holidays.iter()
    }

    /// Returns true if this calendar has no weekend and no holidays.
    #[must_use]
    pub fn is_no_holidays(&self) -> bool {
        self.weekend_mask == 0 && self.holidays.is_empty()
    }

    /// Combines two calendars; a date is a holiday if it is a holiday in either.
    #[must_use]
    pub fn combined_with(&self, other: &HolidayCalendar) -> Self {
        if self == other || other.is_no_holidays() {
            return self.clone();
        }
        if self.is_no_holidays() {
            return other.clone();
        }
        log::debug!("combining holiday calendars {} and {}", self.id, other.id);
        Self {
            id: Cow::Owned(format!("{}+{}", self.id, other.id)),
            weekend_mask: self.weekend_mask | other.weekend_mask,
            holidays: self.holidays.union(&other.holidays).copied().collect(),
        }
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::NO_HOLIDAYS
    }
}

impl Calendar for HolidayCalendar {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.weekend_mask & weekday_bit(date.weekday()) == 0 && !self.holidays.contains(&date)
    }
}

impl fmt::Display for HolidayCalendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_sat_sun_calendar() {
        let cal = HolidayCalendar::sat_sun();

        assert!(cal.is_business_day(date(2025, 1, 6)));
        assert!(!cal.is_business_day(date(2025, 1, 4)));
        assert!(!cal.is_business_day(date(2025, 1, 5)));
    }

    #[test]
    fn test_no_holidays() {
        let cal = HolidayCalendar::no_holidays();
        assert!(cal.is_business_day(date(2025, 1, 4)));
        assert_eq!(cal.id(), "NoHolidays");
    }

    #[test]
    fn test_add_business_days() {
        let cal = HolidayCalendar::sat_sun();

        // Friday + 1 business day = Monday
        assert_eq!(cal.add_business_days(date(2025, 1, 3), 1), date(2025, 1, 6));
        assert_eq!(cal.add_business_days(date(2025, 1, 6), -1), date(2025, 1, 3));
        assert_eq!(cal.add_business_days(date(2025, 1, 4), 0), date(2025, 1, 4));
    }

    #[test]
    fn test_business_days_between() {
        let cal = HolidayCalendar::sat_sun();
        assert_eq!(cal.business_days_between(date(2025, 1, 6), date(2025, 1, 10)), 4);
    }

    #[test]
    fn test_last_business_day_of_month() {
        let cal = HolidayCalendar::sat_sun();
        // 2025-05-31 is a Saturday
        assert_eq!(cal.last_business_day_of_month(date(2025, 5, 10)), date(2025, 5, 30));
        assert!(cal.is_last_business_day_of_month(date(2025, 5, 30)));
        assert!(!cal.is_last_business_day_of_month(date(2025, 5, 31)));
    }

    #[test]
    fn test_combined_with() {
        let xmas = date(2025, 12, 25);
        let boxing = date(2025, 12, 26);
        let a = HolidayCalendar::new("A", WeekendType::SaturdaySunday, [xmas]);
        let b = HolidayCalendar::new("B", WeekendType::FridaySaturday, [boxing]);
        let joint = a.combined_with(&b);

        assert_eq!(joint.id(), "A+B");
        assert!(!joint.is_business_day(xmas));
        assert!(!joint.is_business_day(boxing));
        // Friday 2025-01-03 is a weekend day in B
        assert!(!joint.is_business_day(date(2025, 1, 3)));
        assert!(joint.is_business_day(date(2025, 1, 2)));

        assert_eq!(a.combined_with(&HolidayCalendar::no_holidays()), a);
        assert_eq!(HolidayCalendar::no_holidays().combined_with(&a), a);
    }

    #[test]
    fn test_weekend_type() {
        assert!(WeekendType::SaturdaySunday.is_weekend(chrono::Weekday::Sun));
        assert!(!WeekendType::SundayOnly.is_weekend(chrono::Weekday::Sat));
        assert!(!WeekendType::None.is_weekend(chrono::Weekday::Sat));
    }
}
