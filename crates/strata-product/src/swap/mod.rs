//! Rate swap legs.
//!
//! A [`RateSwapLeg`] combines an accrual [`PeriodicSchedule`](crate::schedule::PeriodicSchedule),
//! a [`PaymentSchedule`], a [`NotionalAmount`] and a [`RateCalculation`].
//! Expansion resolves it into an [`ExpandedSwapLeg`]: payment periods, each
//! holding the accrual periods it pays, with the notional signed by direction.

mod accrual;
mod calculation;
mod expanded;
mod leg;
mod notional;
mod payment;

pub use accrual::{RateAccrualPeriod, RateObservation};
pub use calculation::{FixedRateCalculation, IborRateCalculation, RateCalculation};
pub use expanded::ExpandedSwapLeg;
pub use leg::{RateSwapLeg, RateSwapLegBuilder, SwapLeg};
pub use notional::NotionalAmount;
pub use payment::{PaymentRelativeTo, PaymentSchedule, RatePaymentPeriod};
