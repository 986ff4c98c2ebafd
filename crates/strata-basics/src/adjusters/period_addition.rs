//! Conventions for adding a period to a date.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendars::Calendar;
use crate::error::StrataResult;
use crate::types::{Date, Period};

/// Rule applied when a period is added to a date.
///
/// The month-based conventions only make sense for periods made of years and
/// months; [`crate::adjusters::PeriodAdjustment`] rejects them in combination
/// with a non-zero day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PeriodAdditionConvention {
    /// Plain period addition, clamping to the end of a shorter month.
    #[default]
    None,
    /// If the input is the last day of its month, the result is the last day
    /// of the target month.
    LastDay,
    /// If the input is the last business day of its month, the result is the
    /// last business day of the target month.
    LastBusinessDay,
}

impl PeriodAdditionConvention {
    /// Returns true if the convention only applies to month-based periods.
    #[must_use]
    pub fn is_month_based(&self) -> bool {
        !matches!(self, PeriodAdditionConvention::None)
    }

    /// Adds the period to the date using the convention.
    ///
    /// The calendar is only consulted by [`PeriodAdditionConvention::LastBusinessDay`].
    pub fn adjust<C: Calendar + ?Sized>(
        &self,
        date: Date,
        period: Period,
        calendar: &C,
    ) -> StrataResult<Date> {
        let end = date.plus(period)?;
        match self {
            PeriodAdditionConvention::None => Ok(end),
            PeriodAdditionConvention::LastDay => {
                if date.is_end_of_month() {
                    Ok(end.end_of_month())
                } else {
                    Ok(end)
                }
            }
            PeriodAdditionConvention::LastBusinessDay => {
                if calendar.is_last_business_day_of_month(date) {
                    Ok(calendar.last_business_day_of_month(end))
                } else {
                    Ok(end)
                }
            }
        }
    }

    /// Returns the convention name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            PeriodAdditionConvention::None => "None",
            PeriodAdditionConvention::LastDay => "LastDay",
            PeriodAdditionConvention::LastBusinessDay => "LastBusinessDay",
        }
    }
}

impl fmt::Display for PeriodAdditionConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
