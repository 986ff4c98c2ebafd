//! Identifiers of market data held in a snapshot.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use strata_basics::{Currency, RateIndex};

/// The name of a group of curves used together for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurveGroupName(String);

impl CurveGroupName {
    /// Creates a group name.
    #[must_use]
    pub fn of(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveGroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurveGroupName {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}

/// The source of a piece of observable market data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketDataFeed(Cow<'static, str>);

impl MarketDataFeed {
    /// No specific feed.
    pub const NONE: MarketDataFeed = MarketDataFeed(Cow::Borrowed("None"));

    /// Creates a feed name.
    #[must_use]
    pub fn of(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MarketDataFeed {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for MarketDataFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a quote published by a feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuoteId {
    /// Ticker or other symbol of the quote.
    pub symbol: String,
    /// Feed publishing the quote.
    #[serde(default)]
    pub feed: MarketDataFeed,
}

impl QuoteId {
    /// Creates a quote identifier with no specific feed.
    #[must_use]
    pub fn of(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            feed: MarketDataFeed::NONE,
        }
    }
}

/// Identifies observable data, the keys of time series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservableId {
    /// Fixings of a rate index.
    IndexRate(RateIndex),
    /// A market quote.
    Quote(QuoteId),
}

impl From<RateIndex> for ObservableId {
    fn from(index: RateIndex) -> Self {
        ObservableId::IndexRate(index)
    }
}

impl fmt::Display for ObservableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservableId::IndexRate(index) => write!(f, "IndexRate[{index}]"),
            ObservableId::Quote(quote) => write!(f, "Quote[{}, {}]", quote.symbol, quote.feed),
        }
    }
}

/// Identifies a current value held in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketDataId {
    /// Discount curve of a currency within a curve group.
    DiscountCurve {
        /// Currency discounted by the curve.
        currency: Currency,
        /// Group the curve belongs to.
        group: CurveGroupName,
    },
    /// Forward curve of a rate index within a curve group.
    RateIndexCurve {
        /// Index forecast by the curve.
        index: RateIndex,
        /// Group the curve belongs to.
        group: CurveGroupName,
    },
    /// Discount factors derived from a zero rate curve.
    ZeroRateDiscountFactors {
        /// Currency discounted.
        currency: Currency,
        /// Group the curve belongs to.
        group: CurveGroupName,
        /// Feed the curve inputs came from.
        feed: MarketDataFeed,
    },
    /// Spot FX rate, in units of `counter` per unit of `base`.
    FxRate {
        /// Base currency.
        base: Currency,
        /// Counter currency.
        counter: Currency,
    },
}

impl MarketDataId {
    /// Creates a discount curve identifier.
    #[must_use]
    pub fn discount_curve(currency: Currency, group: impl Into<CurveGroupName>) -> Self {
        MarketDataId::DiscountCurve {
            currency,
            group: group.into(),
        }
    }

    /// Creates a rate index curve identifier.
    #[must_use]
    pub fn rate_index_curve(index: impl Into<RateIndex>, group: impl Into<CurveGroupName>) -> Self {
        MarketDataId::RateIndexCurve {
            index: index.into(),
            group: group.into(),
        }
    }

    /// Creates a zero rate discount factors identifier.
    #[must_use]
    pub fn zero_rate_discount_factors(
        currency: Currency,
        group: impl Into<CurveGroupName>,
        feed: MarketDataFeed,
    ) -> Self {
        MarketDataId::ZeroRateDiscountFactors {
            currency,
            group: group.into(),
            feed,
        }
    }

    /// Creates an FX rate identifier.
    #[must_use]
    pub fn fx_rate(base: Currency, counter: Currency) -> Self {
        MarketDataId::FxRate { base, counter }
    }
}

impl fmt::Display for MarketDataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketDataId::DiscountCurve { currency, group } => {
                write!(f, "DiscountCurve[{currency}, {group}]")
            }
            MarketDataId::RateIndexCurve { index, group } => {
                write!(f, "RateIndexCurve[{index}, {group}]")
            }
            MarketDataId::ZeroRateDiscountFactors {
                currency,
                group,
                feed,
            } => write!(f, "ZeroRateDiscountFactors[{currency}, {group}, {feed}]"),
            MarketDataId::FxRate { base, counter } => write!(f, "FxRate[{base}/{counter}]"),
        }
    }
}
