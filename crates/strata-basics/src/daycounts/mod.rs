//! Day count conventions.
//!
//! Day count conventions determine how accrual is calculated by specifying
//! how to count days between two dates and the year basis.
//!
//! - [`DayCount::Act360`]: Actual/360, money market convention
//! - [`DayCount::Act365F`]: Actual/365 Fixed
//! - [`DayCount::Thirty360`]: 30/360 bond basis (ISDA)
//! - [`DayCount::ThirtyE360`]: 30E/360 Eurobond basis
//!
//! ```rust
//! use strata_basics::daycounts::DayCount;
//! use strata_basics::types::Date;
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2025, 7, 15).unwrap();
//! assert_eq!(DayCount::Thirty360.year_fraction(start, end), 0.5);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Date;

/// Supported day count conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayCount {
    /// Actual/360
    Act360,
    /// Actual/365 Fixed
    Act365F,
    /// 30/360 bond basis
    Thirty360,
    /// 30E/360 Eurobond basis
    ThirtyE360,
}

impl DayCount {
    /// Returns the market name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act360 => "Act/360",
            DayCount::Act365F => "Act/365F",
            DayCount::Thirty360 => "30/360 ISDA",
            DayCount::ThirtyE360 => "30E/360",
        }
    }

    /// Calculates the day count between two dates.
    ///
    /// Actual conventions count calendar days; 30/360 conventions assume
    /// 30-day months.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCount::Act360 | DayCount::Act365F => start.days_between(&end),
            DayCount::Thirty360 => {
                let mut d1 = i64::from(start.day());
                let mut d2 = i64::from(end.day());
                if d1 == 31 {
                    d1 = 30;
                }
                if d2 == 31 && d1 == 30 {
                    d2 = 30;
                }
                thirty_360(start, end, d1, d2)
            }
            DayCount::ThirtyE360 => {
                let d1 = i64::from(start.day()).min(30);
                let d2 = i64::from(end.day()).min(30);
                thirty_360(start, end, d1, d2)
            }
        }
    }

    /// Calculates the year fraction between two dates; negative if end < start.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        let days = self.day_count(start, end) as f64;
        match self {
            DayCount::Act365F => days / 365.0,
            DayCount::Act360 | DayCount::Thirty360 | DayCount::ThirtyE360 => days / 360.0,
        }
    }
}

fn thirty_360(start: Date, end: Date, d1: i64, d2: i64) -> i64 {
    let years = i64::from(end.year() - start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    360 * years + 30 * months + (d2 - d1)
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
