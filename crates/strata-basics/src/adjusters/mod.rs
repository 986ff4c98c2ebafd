//! Date adjusters built from periods, addition conventions and business day rules.

mod period_addition;
mod period_adjustment;

pub use period_addition::PeriodAdditionConvention;
pub use period_adjustment::PeriodAdjustment;
