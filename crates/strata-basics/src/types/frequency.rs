//! Payment frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Period;

/// Periodic frequency of accrual or payment events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Monthly events (12 per year)
    Monthly,
    /// Quarterly events (4 per year)
    Quarterly,
    /// Semi-annual events (2 per year)
    #[default]
    SemiAnnual,
    /// Annual events (1 per year)
    Annual,
    /// A single event covering the whole term
    Term,
}

impl Frequency {
    /// Returns the number of events per year, zero for [`Frequency::Term`].
    #[must_use]
    pub fn events_per_year(&self) -> u32 {
        match self {
            Frequency::Monthly => 12,
            Frequency::Quarterly => 4,
            Frequency::SemiAnnual => 2,
            Frequency::Annual => 1,
            Frequency::Term => 0,
        }
    }

    /// Returns the number of months per period, `None` for [`Frequency::Term`].
    #[must_use]
    pub fn months_per_period(&self) -> Option<i32> {
        match self {
            Frequency::Monthly => Some(1),
            Frequency::Quarterly => Some(3),
            Frequency::SemiAnnual => Some(6),
            Frequency::Annual => Some(12),
            Frequency::Term => None,
        }
    }

    /// Returns the period between two events, `None` for [`Frequency::Term`].
    #[must_use]
    pub fn period(&self) -> Option<Period> {
        self.months_per_period().map(Period::of_months)
    }

    /// Returns true if this is the single-period term frequency.
    #[must_use]
    pub fn is_term(&self) -> bool {
        matches!(self, Frequency::Term)
    }

    /// Returns the number of `other` periods making up one period of `self`.
    ///
    /// Returns `None` when `self` is not an exact multiple of `other`.
    #[must_use]
    pub fn exact_multiple_of(&self, other: Frequency) -> Option<usize> {
        match (self.months_per_period(), other.months_per_period()) {
            (Some(mine), Some(theirs)) if mine % theirs == 0 => Some((mine / theirs) as usize),
            (None, None) => Some(1),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Annual => "Annual",
            Frequency::Term => "Term",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_periods() {
        assert_eq!(Frequency::Annual.events_per_year(), 1);
        assert_eq!(Frequency::Quarterly.events_per_year(), 4);
        assert_eq!(Frequency::Term.events_per_year(), 0);
        assert_eq!(Frequency::SemiAnnual.period(), Some(Period::of_months(6)));
        assert_eq!(Frequency::Term.period(), None);
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(Frequency::Annual.exact_multiple_of(Frequency::Quarterly), Some(4));
        assert_eq!(Frequency::Quarterly.exact_multiple_of(Frequency::Quarterly), Some(1));
        assert_eq!(Frequency::Quarterly.exact_multiple_of(Frequency::SemiAnnual), None);
        assert_eq!(Frequency::Term.exact_multiple_of(Frequency::Monthly), None);
    }
}
