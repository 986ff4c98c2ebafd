//! Stub conventions for irregular schedule periods.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an irregular period is placed when the schedule does not divide evenly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StubConvention {
    /// Short first period; dates roll backward from the end date.
    #[default]
    ShortInitial,
    /// Long first period; the initial stub is merged into the next period.
    LongInitial,
    /// Short last period; dates roll forward from the start date.
    ShortFinal,
    /// Long last period; the final stub is merged into the previous period.
    LongFinal,
}

impl StubConvention {
    /// Returns true if the stub sits at the start of the schedule.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        matches!(self, StubConvention::ShortInitial | StubConvention::LongInitial)
    }

    /// Returns true if the stub is merged with its neighbouring period.
    #[must_use]
    pub fn is_long(&self) -> bool {
        matches!(self, StubConvention::LongInitial | StubConvention::LongFinal)
    }
}

impl fmt::Display for StubConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StubConvention::ShortInitial => "ShortInitial",
            StubConvention::LongInitial => "LongInitial",
            StubConvention::ShortFinal => "ShortFinal",
            StubConvention::LongFinal => "LongFinal",
        };
        write!(f, "{name}")
    }
}
