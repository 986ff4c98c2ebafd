//! # Strata Basics
//!
//! Foundational value types for the Strata analytics library.
//!
//! This crate provides:
//!
//! - **Types**: [`Date`], [`Period`], [`Tenor`], [`Currency`], [`Frequency`], [`PayReceive`]
//! - **Calendars**: Holiday calendars and business-day conventions
//! - **Adjusters**: [`BusinessDayAdjustment`], [`PeriodAdditionConvention`], [`PeriodAdjustment`]
//! - **Day Counts**: Year fraction conventions used by accrual calculations
//! - **Indices**: Ibor and overnight rate indices
//! - **Value Adjustments**: [`ValueAdjustment`] used to perturb curve parameters
//!
//! ## Design Philosophy
//!
//! - **Immutable Values**: Every type is a plain value; adjustments return new values
//! - **Eager Validation**: Invariants are checked at construction, never at use
//! - **Explicit Over Implicit**: Conventions and calendars are always named
//!
//! ## Example
//!
//! ```rust
//! use strata_basics::prelude::*;
//!
//! let adjustment = PeriodAdjustment::of(
//!     Period::of_years(5),
//!     PeriodAdditionConvention::None,
//!     BusinessDayAdjustment::NONE,
//! )
//! .unwrap();
//!
//! let start = Date::from_ymd(2014, 8, 15).unwrap();
//! assert_eq!(adjustment.adjust(start).unwrap(), Date::from_ymd(2019, 8, 15).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::match_same_arms)]

pub mod adjusters;
pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod index;
pub mod types;
pub mod value;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::adjusters::{PeriodAdditionConvention, PeriodAdjustment};
    pub use crate::calendars::{
        BusinessDayAdjustment, BusinessDayConvention, Calendar, HolidayCalendar, WeekendType,
    };
    pub use crate::daycounts::DayCount;
    pub use crate::error::{StrataError, StrataResult};
    pub use crate::index::{IborIndex, OvernightIndex, RateIndex};
    pub use crate::types::{Currency, Date, Frequency, PayReceive, Period, Tenor};
    pub use crate::value::ValueAdjustment;
}

// Re-export commonly used types at crate root
pub use adjusters::{PeriodAdditionConvention, PeriodAdjustment};
pub use calendars::{BusinessDayAdjustment, BusinessDayConvention, Calendar, HolidayCalendar};
pub use daycounts::DayCount;
pub use error::{StrataError, StrataResult};
pub use index::{IborIndex, OvernightIndex, RateIndex};
pub use types::{Currency, Date, Frequency, PayReceive, Period, Tenor};
pub use value::ValueAdjustment;
