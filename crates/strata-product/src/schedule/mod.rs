//! Accrual schedule generation.
//!
//! A [`PeriodicSchedule`] is the definition of a schedule: start and end
//! dates, a frequency, a business day adjustment and a stub convention.
//! [`PeriodicSchedule::create_schedule`] turns it into a [`Schedule`] of
//! [`SchedulePeriod`]s, each carrying both unadjusted and adjusted dates.
//!
//! # Example
//!
//! ```rust
//! use strata_basics::prelude::*;
//! use strata_product::schedule::{PeriodicSchedule, StubConvention};
//!
//! let definition = PeriodicSchedule::of(
//!     Date::from_ymd(2024, 1, 15).unwrap(),
//!     Date::from_ymd(2026, 1, 15).unwrap(),
//!     Frequency::SemiAnnual,
//!     BusinessDayAdjustment::NONE,
//!     StubConvention::ShortInitial,
//! )
//! .unwrap();
//!
//! let schedule = definition.create_schedule().unwrap();
//! assert_eq!(schedule.len(), 4);
//! ```

mod period;
mod periodic;
mod stub;

pub use period::{Schedule, SchedulePeriod};
pub use periodic::PeriodicSchedule;
pub use stub::StubConvention;
