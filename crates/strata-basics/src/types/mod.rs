//! Domain value types.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Period`]: ISO 8601 years/months/days amount
//! - [`Tenor`]: Non-negative market tenor such as `3M`
//! - [`Currency`]: ISO currency codes
//! - [`Frequency`]: Accrual and payment frequency
//! - [`PayReceive`]: Direction of a cash flow stream

mod currency;
mod date;
mod frequency;
mod pay_receive;
mod period;

pub use currency::Currency;
pub use date::Date;
pub(crate) use date::days_in_month;
pub use frequency::Frequency;
pub use pay_receive::PayReceive;
pub use period::{Period, Tenor};
