//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls
/// on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    #[default]
    NoAdjust,

    /// Move to the following business day.
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// As modified following, but the 15th of the month is also a boundary.
    ModifiedFollowingBiMonthly,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,

    /// Move to the nearest business day; Sunday and Monday holidays move forward.
    Nearest,
}

impl BusinessDayConvention {
    /// Adjusts a date according to this convention.
    ///
    /// Business days are returned unchanged.
    pub fn adjust<C: Calendar + ?Sized>(&self, date: Date, calendar: &C) -> Date {
        if calendar.is_business_day(date) {
            return date;
        }

        match self {
            BusinessDayConvention::NoAdjust => date,

            BusinessDayConvention::Following => calendar.next_business_day(date),

            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = calendar.next_business_day(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    calendar.previous_business_day(date)
                }
            }

            BusinessDayConvention::ModifiedFollowingBiMonthly => {
                let adjusted = calendar.next_business_day(date);
                let crossed_mid_month = date.day() <= 15 && adjusted.day() > 15;
                if adjusted.month() == date.month() && !crossed_mid_month {
                    adjusted
                } else {
                    calendar.previous_business_day(date)
                }
            }

            BusinessDayConvention::Preceding => calendar.previous_business_day(date),

            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = calendar.previous_business_day(date);
                if adjusted.month() == date.month() {
                    adjusted
                } else {
                    calendar.next_business_day(date)
                }
            }

            BusinessDayConvention::Nearest => {
                if matches!(date.weekday(), chrono::Weekday::Sun | chrono::Weekday::Mon) {
                    calendar.next_business_day(date)
                } else {
                    calendar.previous_business_day(date)
                }
            }
        }
    }

    /// Returns the convention name used in descriptions.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "NoAdjust",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::ModifiedFollowingBiMonthly => "ModifiedFollowingBiMonthly",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
            BusinessDayConvention::Nearest => "Nearest",
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
