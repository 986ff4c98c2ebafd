//! Business day adjustment: a convention paired with a calendar.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BusinessDayConvention, HolidayCalendar};
use crate::types::Date;

/// Adjusts a date to a business day using a convention and a holiday calendar.
///
/// # Example
///
/// ```rust
/// use strata_basics::calendars::{BusinessDayAdjustment, BusinessDayConvention, HolidayCalendar};
/// use strata_basics::types::Date;
///
/// let calendar = HolidayCalendar::sat_sun();
/// let bda = BusinessDayAdjustment::of(BusinessDayConvention::Following, calendar);
/// let saturday = Date::from_ymd(2025, 1, 4).unwrap();
/// assert_eq!(bda.adjust(saturday), Date::from_ymd(2025, 1, 6).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessDayAdjustment {
    convention: BusinessDayConvention,
    calendar: HolidayCalendar,
}

impl BusinessDayAdjustment {
    /// An adjustment that performs no adjustment.
    pub const NONE: BusinessDayAdjustment = BusinessDayAdjustment {
        convention: BusinessDayConvention::NoAdjust,
        calendar: HolidayCalendar::NO_HOLIDAYS,
    };

    /// Creates an adjustment from a convention and calendar.
    #[must_use]
    pub fn of(convention: BusinessDayConvention, calendar: HolidayCalendar) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// Returns the convention.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Returns the holiday calendar.
    #[must_use]
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Adjusts the date.
    #[must_use]
    pub fn adjust(&self, date: Date) -> Date {
        self.convention.adjust(date, &self.calendar)
    }

    /// Returns true if this adjustment can never change a date.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.convention == BusinessDayConvention::NoAdjust
    }
}

impl Default for BusinessDayAdjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for BusinessDayAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "{}", self.convention)
        } else {
            write!(f, "{} using calendar {}", self.convention, self.calendar)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_adjusts() {
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        assert_eq!(BusinessDayAdjustment::NONE.adjust(saturday), saturday);
        assert!(BusinessDayAdjustment::NONE.is_none());
        assert_eq!(BusinessDayAdjustment::default(), BusinessDayAdjustment::NONE);
    }

    #[test]
    fn test_display() {
        assert_eq!(BusinessDayAdjustment::NONE.to_string(), "NoAdjust");
        let bda = BusinessDayAdjustment::of(
            BusinessDayConvention::ModifiedFollowing,
            HolidayCalendar::sat_sun(),
        );
        assert_eq!(bda.to_string(), "ModifiedFollowing using calendar Sat/Sun");
    }
}
