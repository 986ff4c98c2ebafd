//! Accrual periods produced by expanding a rate calculation.

use serde::{Deserialize, Serialize};

use strata_basics::{Date, IborIndex};

use crate::schedule::SchedulePeriod;

/// The rate observed for an accrual period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RateObservation {
    /// A rate known at trade date.
    Fixed {
        /// The fixed rate, as a decimal.
        rate: f64,
    },
    /// A rate fixed from an Ibor index.
    Ibor {
        /// The index observed.
        index: IborIndex,
        /// The date the index is fixed.
        fixing_date: Date,
    },
}

impl RateObservation {
    /// Returns the rate if it is known without market data.
    #[must_use]
    pub fn fixed_rate(&self) -> Option<f64> {
        match self {
            RateObservation::Fixed { rate } => Some(*rate),
            RateObservation::Ibor { .. } => None,
        }
    }

    /// Returns the fixing date of an index observation.
    #[must_use]
    pub fn fixing_date(&self) -> Option<Date> {
        match self {
            RateObservation::Fixed { .. } => None,
            RateObservation::Ibor { fixing_date, .. } => Some(*fixing_date),
        }
    }
}

/// A single accrual period of an expanded swap leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAccrualPeriod {
    period: SchedulePeriod,
    year_fraction: f64,
    observation: RateObservation,
    spread: f64,
}

impl RateAccrualPeriod {
    /// Creates an accrual period.
    #[must_use]
    pub fn new(
        period: SchedulePeriod,
        year_fraction: f64,
        observation: RateObservation,
        spread: f64,
    ) -> Self {
        Self {
            period,
            year_fraction,
            observation,
            spread,
        }
    }

    /// Returns the schedule period accrued over.
    #[must_use]
    pub fn schedule_period(&self) -> &SchedulePeriod {
        &self.period
    }

    /// Returns the adjusted start date.
    #[must_use]
    pub fn start_date(&self) -> Date {
        self.period.start_date()
    }

    /// Returns the adjusted end date.
    #[must_use]
    pub fn end_date(&self) -> Date {
        self.period.end_date()
    }

    /// Returns the unadjusted start date.
    #[must_use]
    pub fn unadjusted_start_date(&self) -> Date {
        self.period.unadjusted_start_date()
    }

    /// Returns the unadjusted end date.
    #[must_use]
    pub fn unadjusted_end_date(&self) -> Date {
        self.period.unadjusted_end_date()
    }

    /// Returns the year fraction under the calculation's day count.
    #[must_use]
    pub fn year_fraction(&self) -> f64 {
        self.year_fraction
    }

    /// Returns the rate observation.
    #[must_use]
    pub fn observation(&self) -> &RateObservation {
        &self.observation
    }

    /// Returns the spread added to the observed rate.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns the accrual on a signed notional, if the rate is known.
    #[must_use]
    pub fn fixed_accrual(&self, notional: f64) -> Option<f64> {
        self.observation
            .fixed_rate()
            .map(|rate| notional * (rate + self.spread) * self.year_fraction)
    }
}
