//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{StrataError, StrataResult};
use crate::types::Period;

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// month arithmetic with end-of-month clamping and period addition.
///
/// # Example
///
/// ```rust
/// use strata_basics::types::{Date, Period};
///
/// let date = Date::from_ymd(2025, 1, 31).unwrap();
/// let next = date.plus(Period::of_months(1)).unwrap();
/// assert_eq!(next, Date::from_ymd(2025, 2, 28).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> StrataResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| StrataError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> StrataResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| StrataError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of days to the date.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the result is out of range.
    pub fn checked_add_days(&self, days: i64) -> StrataResult<Self> {
        let step = chrono::Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(step)
        } else {
            self.0.checked_sub_days(step)
        };
        shifted
            .map(Date)
            .ok_or_else(|| StrataError::invalid_date(format!("{self} plus {days} days")))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> StrataResult<Self> {
        self.shift_months(i64::from(months))
    }

    fn shift_months(&self, months: i64) -> StrataResult<Self> {
        let out_of_range = || StrataError::invalid_date(format!("{self} plus {months} months"));
        let total_months = i64::from(self.year())
            .checked_mul(12)
            .and_then(|m| m.checked_add(i64::from(self.month()) - 1))
            .and_then(|m| m.checked_add(months))
            .ok_or_else(out_of_range)?;
        let new_year = i32::try_from(total_months.div_euclid(12)).map_err(|_| out_of_range())?;
        let new_month = u32::try_from(total_months.rem_euclid(12) + 1).map_err(|_| out_of_range())?;

        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date, clamping Feb 29 to Feb 28.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the result is invalid.
    pub fn add_years(&self, years: i32) -> StrataResult<Self> {
        let new_year = self
            .year()
            .checked_add(years)
            .ok_or_else(|| StrataError::invalid_date(format!("{self} plus {years} years")))?;
        let max_day = days_in_month(new_year, self.month());
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Adds a calendar period.
    ///
    /// Years and months are added together as a single month count, then
    /// days are added. Adding `P1M` to Jan 31 yields the end of February.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the result is out of range.
    pub fn plus(&self, period: Period) -> StrataResult<Self> {
        self.shift(period.total_months(), i64::from(period.days()))
    }

    /// Subtracts a calendar period.
    ///
    /// # Errors
    ///
    /// Returns `StrataError::InvalidDate` if the result is out of range.
    pub fn minus(&self, period: Period) -> StrataResult<Self> {
        self.shift(-period.total_months(), -i64::from(period.days()))
    }

    fn shift(&self, months: i64, days: i64) -> StrataResult<Self> {
        let shifted = if months == 0 {
            *self
        } else {
            self.shift_months(months)?
        };
        shifted.checked_add_days(days)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the end of month for the current date.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.with_day_clamped(self.days_in_month())
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn start_of_month(&self) -> Self {
        self.with_day_clamped(1)
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    fn with_day_clamped(&self, day: u32) -> Self {
        let day = day.clamp(1, self.days_in_month());
        // day is within the month's range, so with_day cannot fail
        Date(self.0.with_day(day).unwrap_or(self.0))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Number of days in a month for a given year.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_add_months() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.month(), 2);
        assert_eq!(result.day(), 28);
    }

    #[test]
    fn test_add_negative_months_crosses_year() {
        let date = Date::from_ymd(2025, 1, 15).unwrap();
        assert_eq!(date.add_months(-1).unwrap(), Date::from_ymd(2024, 12, 15).unwrap());
        assert_eq!(date.add_months(-13).unwrap(), Date::from_ymd(2023, 12, 15).unwrap());
    }

    #[test]
    fn test_add_years_from_leap_day() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_out_of_range_arithmetic() {
        let date = Date::from_ymd(2014, 8, 15).unwrap();
        assert!(date.checked_add_days(i64::MAX).is_err());
        assert!(date.checked_add_days(i64::MIN).is_err());
        assert!(date.add_months(i32::MAX).is_err());
        assert!(date.add_years(i32::MIN).is_err());
        assert!(date.minus(Period::of_years(i32::MIN)).is_err());
        assert_eq!(
            date.checked_add_days(-15).unwrap(),
            Date::from_ymd(2014, 7, 31).unwrap()
        );
    }

    #[test]
    fn test_plus_period() {
        let date = Date::from_ymd(2014, 8, 15).unwrap();
        assert_eq!(
            date.plus(Period::of_years(5)).unwrap(),
            Date::from_ymd(2019, 8, 15).unwrap()
        );
        assert_eq!(
            date.plus(Period::of(1, 2, 3)).unwrap(),
            Date::from_ymd(2015, 10, 18).unwrap()
        );
        assert_eq!(
            date.minus(Period::of_days(15)).unwrap(),
            Date::from_ymd(2014, 7, 31).unwrap()
        );
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(d1.days_between(&d2), 30);
        assert_eq!(d2 - d1, 30);
    }

    #[test]
    fn test_end_of_month() {
        let date = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
        assert!(date.end_of_month().is_end_of_month());
        assert_eq!(date.start_of_month(), Date::from_ymd(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_parse_and_display() {
        let date: Date = "2025-06-15".parse().unwrap();
        assert_eq!(format!("{}", date), "2025-06-15");
        assert!(Date::parse("2025/06/15").is_err());
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
