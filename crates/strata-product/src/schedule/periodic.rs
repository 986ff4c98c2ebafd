//! Periodic schedule definition and generation.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use strata_basics::{BusinessDayAdjustment, Date, Frequency, Period};

use super::{Schedule, SchedulePeriod, StubConvention};
use crate::error::{ProductError, ProductResult};

/// The definition of a periodic schedule.
///
/// Dates are rolled from the anchor given by the stub convention: the end
/// date for initial stubs, the start date for final stubs. Each date is
/// computed as a multiple of the frequency from the anchor, so day-of-month
/// clamping in short months never drifts into later dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodicSchedule {
    start_date: Date,
    end_date: Date,
    frequency: Frequency,
    #[serde(default)]
    business_day_adjustment: BusinessDayAdjustment,
    #[serde(default)]
    stub_convention: StubConvention,
    #[serde(default)]
    end_of_month: bool,
}

impl PeriodicSchedule {
    /// Creates a schedule definition.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidSchedule` if the end date is not after the start date.
    pub fn of(
        start_date: Date,
        end_date: Date,
        frequency: Frequency,
        business_day_adjustment: BusinessDayAdjustment,
        stub_convention: StubConvention,
    ) -> ProductResult<Self> {
        let schedule = Self {
            start_date,
            end_date,
            frequency,
            business_day_adjustment,
            stub_convention,
            end_of_month: false,
        };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Sets the end-of-month rule.
    ///
    /// When enabled and the anchor date is the last day of its month, every
    /// rolled date is moved to the last day of its month.
    #[must_use]
    pub fn with_end_of_month(mut self, end_of_month: bool) -> Self {
        self.end_of_month = end_of_month;
        self
    }

    /// Returns the unadjusted start date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the unadjusted end date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the start date after business day adjustment.
    #[must_use]
    pub fn adjusted_start_date(&self) -> Date {
        self.business_day_adjustment.adjust(self.start_date)
    }

    /// Returns the end date after business day adjustment.
    #[must_use]
    pub fn adjusted_end_date(&self) -> Date {
        self.business_day_adjustment.adjust(self.end_date)
    }

    /// Returns the frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the business day adjustment.
    #[must_use]
    pub fn business_day_adjustment(&self) -> &BusinessDayAdjustment {
        &self.business_day_adjustment
    }

    /// Returns the stub convention.
    #[must_use]
    pub fn stub_convention(&self) -> StubConvention {
        self.stub_convention
    }

    /// Returns true if the end-of-month rule is enabled.
    #[must_use]
    pub fn end_of_month(&self) -> bool {
        self.end_of_month
    }

    /// Generates the schedule.
    ///
    /// # Errors
    ///
    /// Returns `ProductError::InvalidSchedule` if the definition is invalid
    /// or business day adjustment collapses two dates onto the same day.
    pub fn create_schedule(&self) -> ProductResult<Schedule> {
        self.validate()?;

        let unadjusted = self.unadjusted_dates()?;
        let adjusted: Vec<Date> = unadjusted
            .iter()
            .map(|d| self.business_day_adjustment.adjust(*d))
            .collect();

        if let Some(pair) = adjusted.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ProductError::invalid_schedule(format!(
                "adjusted dates are not increasing: {} then {}",
                pair[0], pair[1]
            )));
        }

        let periods: Vec<SchedulePeriod> = (0..adjusted.len() - 1)
            .map(|i| {
                SchedulePeriod::new(adjusted[i], adjusted[i + 1], unadjusted[i], unadjusted[i + 1])
            })
            .collect();

        debug!(
            "Generated {} {} periods from {} to {}",
            periods.len(),
            self.frequency,
            self.start_date,
            self.end_date
        );
        Ok(Schedule::new(self.frequency, periods))
    }

    fn validate(&self) -> ProductResult<()> {
        if self.end_date <= self.start_date {
            return Err(ProductError::invalid_schedule(format!(
                "end date {} must be after start date {}",
                self.end_date, self.start_date
            )));
        }
        Ok(())
    }

    fn unadjusted_dates(&self) -> ProductResult<Vec<Date>> {
        let Some(period) = self.frequency.period() else {
            return Ok(vec![self.start_date, self.end_date]);
        };

        if self.stub_convention.is_initial() {
            self.roll_backward(period)
        } else {
            self.roll_forward(period)
        }
    }

    fn roll_forward(&self, period: Period) -> ProductResult<Vec<Date>> {
        let eom = self.end_of_month && self.start_date.is_end_of_month();
        let mut dates = vec![self.start_date];
        let mut n = 1;
        let exact = loop {
            let date = roll(self.start_date, period, n, eom)?;
            if date >= self.end_date {
                break date == self.end_date;
            }
            dates.push(date);
            n += 1;
        };
        dates.push(self.end_date);

        if !exact && self.stub_convention.is_long() && dates.len() > 2 {
            let merged = dates.remove(dates.len() - 2);
            trace!("Merged final stub starting {merged}");
        }
        Ok(dates)
    }

    fn roll_backward(&self, period: Period) -> ProductResult<Vec<Date>> {
        let eom = self.end_of_month && self.end_date.is_end_of_month();
        let mut dates = vec![self.end_date];
        let mut n = 1;
        let exact = loop {
            let date = roll(self.end_date, period, -n, eom)?;
            if date <= self.start_date {
                break date == self.start_date;
            }
            dates.push(date);
            n += 1;
        };
        dates.push(self.start_date);
        dates.reverse();

        if !exact && self.stub_convention.is_long() && dates.len() > 2 {
            let merged = dates.remove(1);
            trace!("Merged initial stub ending {merged}");
        }
        Ok(dates)
    }
}

fn roll(anchor: Date, period: Period, n: i32, eom: bool) -> ProductResult<Date> {
    let date = anchor.plus(period.multiplied_by(n))?;
    Ok(if eom { date.end_of_month() } else { date })
}
