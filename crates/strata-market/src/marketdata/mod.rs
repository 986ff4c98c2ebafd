//! Market data consumed by calculations.
//!
//! A [`MarketDataSnapshot`] is assembled in memory from time series keyed by
//! [`ObservableId`] and current values keyed by [`MarketDataId`].

mod ids;
mod rules;
mod snapshot;
mod timeseries;

pub use ids::{CurveGroupName, MarketDataFeed, MarketDataId, ObservableId, QuoteId};
pub use rules::{MarketDataMappings, MarketDataRule, MarketDataRules};
pub use snapshot::{MarketDataSnapshot, MarketDataSnapshotBuilder, MarketDataValue};
pub use timeseries::DateDoubleTimeSeries;
