//! Interest rate indices.
//!
//! - [`IborIndex`]: Term rates such as `USD-LIBOR-3M`
//! - [`OvernightIndex`]: Overnight rates such as `USD-FED-FUND`
//! - [`RateIndex`]: Either kind, used to key market data

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::daycounts::DayCount;
use crate::types::{Currency, Tenor};

/// A term interest rate index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IborIndex {
    name: Cow<'static, str>,
    currency: Currency,
    tenor: Tenor,
    day_count: DayCount,
    fixing_offset_days: i32,
}

impl IborIndex {
    /// USD LIBOR 3 month.
    pub const USD_LIBOR_3M: IborIndex =
        IborIndex::constant("USD-LIBOR-3M", Currency::USD, Tenor::TENOR_3M, DayCount::Act360, 2);
    /// USD LIBOR 6 month.
    pub const USD_LIBOR_6M: IborIndex =
        IborIndex::constant("USD-LIBOR-6M", Currency::USD, Tenor::TENOR_6M, DayCount::Act360, 2);
    /// GBP LIBOR 3 month.
    pub const GBP_LIBOR_3M: IborIndex =
        IborIndex::constant("GBP-LIBOR-3M", Currency::GBP, Tenor::TENOR_3M, DayCount::Act365F, 0);
    /// EURIBOR 3 month.
    pub const EUR_EURIBOR_3M: IborIndex =
        IborIndex::constant("EUR-EURIBOR-3M", Currency::EUR, Tenor::TENOR_3M, DayCount::Act360, 2);

    const fn constant(
        name: &'static str,
        currency: Currency,
        tenor: Tenor,
        day_count: DayCount,
        fixing_offset_days: i32,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            currency,
            tenor,
            day_count,
            fixing_offset_days,
        }
    }

    /// Creates an index.
    ///
    /// `fixing_offset_days` is the number of business days between fixing and effective date.
    pub fn new(
        name: impl Into<String>,
        currency: Currency,
        tenor: Tenor,
        day_count: DayCount,
        fixing_offset_days: i32,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            currency,
            tenor,
            day_count,
            fixing_offset_days,
        }
    }

    /// Returns the index name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the tenor of the rate.
    #[must_use]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Returns the day count used by the rate.
    #[must_use]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the business days between fixing and effective date.
    #[must_use]
    pub fn fixing_offset_days(&self) -> i32 {
        self.fixing_offset_days
    }
}

/// An overnight interest rate index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OvernightIndex {
    name: Cow<'static, str>,
    currency: Currency,
    day_count: DayCount,
}

impl OvernightIndex {
    /// US Fed Funds.
    pub const USD_FED_FUND: OvernightIndex = OvernightIndex {
        name: Cow::Borrowed("USD-FED-FUND"),
        currency: Currency::USD,
        day_count: DayCount::Act360,
    };
    /// GBP SONIA.
    pub const GBP_SONIA: OvernightIndex = OvernightIndex {
        name: Cow::Borrowed("GBP-SONIA"),
        currency: Currency::GBP,
        day_count: DayCount::Act365F,
    };

    /// Creates an index.
    pub fn new(name: impl Into<String>, currency: Currency, day_count: DayCount) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            currency,
            day_count,
        }
    }

    /// Returns the index name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the day count used by the rate.
    #[must_use]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }
}

/// Any interest rate index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateIndex {
    /// A term rate index
    Ibor(IborIndex),
    /// An overnight rate index
    Overnight(OvernightIndex),
}

impl RateIndex {
    /// Returns the index name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            RateIndex::Ibor(index) => index.name(),
            RateIndex::Overnight(index) => index.name(),
        }
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        match self {
            RateIndex::Ibor(index) => index.currency(),
            RateIndex::Overnight(index) => index.currency(),
        }
    }
}

impl From<IborIndex> for RateIndex {
    fn from(index: IborIndex) -> Self {
        RateIndex::Ibor(index)
    }
}

impl From<OvernightIndex> for RateIndex {
    fn from(index: OvernightIndex) -> Self {
        RateIndex::Overnight(index)
    }
}

impl fmt::Display for IborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for OvernightIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for RateIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
