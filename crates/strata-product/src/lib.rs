//! # Strata Product
//!
//! Accrual schedules and interest rate swap legs for the Strata analytics library.
//!
//! This crate provides:
//!
//! - **Schedules**: [`PeriodicSchedule`] definitions generating [`Schedule`]s
//!   with initial or final stubs and business day adjustment
//! - **Swap Legs**: [`RateSwapLeg`] with fixed or Ibor [`RateCalculation`]s,
//!   expanded into [`ExpandedSwapLeg`] payment periods
//!
//! ## Quick Start
//!
//! ```rust
//! use strata_basics::prelude::*;
//! use strata_product::prelude::*;
//!
//! let leg = RateSwapLeg::of(
//!     PayReceive::Receive,
//!     PeriodicSchedule::of(
//!         Date::from_ymd(2025, 1, 15).unwrap(),
//!         Date::from_ymd(2026, 1, 15).unwrap(),
//!         Frequency::Quarterly,
//!         BusinessDayAdjustment::NONE,
//!         StubConvention::ShortInitial,
//!     )
//!     .unwrap(),
//!     PaymentSchedule::of(Frequency::Quarterly, 2),
//!     NotionalAmount::of(Currency::USD, 1_000_000.0).unwrap(),
//!     IborRateCalculation::of(IborIndex::USD_LIBOR_3M),
//! );
//!
//! let expanded = leg.to_expanded().unwrap();
//! assert_eq!(expanded.payment_periods().len(), 4);
//! assert_eq!(expanded.currency(), Currency::USD);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod error;
pub mod schedule;
pub mod swap;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ProductError, ProductResult};
    pub use crate::schedule::{PeriodicSchedule, Schedule, SchedulePeriod, StubConvention};
    pub use crate::swap::{
        ExpandedSwapLeg, FixedRateCalculation, IborRateCalculation, NotionalAmount,
        PaymentRelativeTo, PaymentSchedule, RateAccrualPeriod, RateCalculation, RateObservation,
        RatePaymentPeriod, RateSwapLeg, RateSwapLegBuilder, SwapLeg,
    };
}

// Re-export commonly used types at crate root
pub use error::{ProductError, ProductResult};
pub use schedule::{PeriodicSchedule, Schedule, SchedulePeriod, StubConvention};
pub use swap::{
    ExpandedSwapLeg, FixedRateCalculation, IborRateCalculation, NotionalAmount, PaymentSchedule,
    RateCalculation, RateSwapLeg, SwapLeg,
};
