//! Rules choosing which market data a calculation target uses.

use serde::{Deserialize, Serialize};

use super::ids::{CurveGroupName, MarketDataFeed};

/// Where a calculation reads its market data from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarketDataMappings {
    /// Curve group supplying curves.
    pub curve_group: CurveGroupName,
    /// Feed supplying observable data.
    #[serde(default)]
    pub feed: MarketDataFeed,
}

impl MarketDataMappings {
    /// Creates mappings for a curve group with no specific feed.
    #[must_use]
    pub fn of(curve_group: impl Into<CurveGroupName>) -> Self {
        Self {
            curve_group: curve_group.into(),
            feed: MarketDataFeed::NONE,
        }
    }

    /// Returns a copy reading observable data from the feed.
    #[must_use]
    pub fn with_feed(mut self, feed: MarketDataFeed) -> Self {
        self.feed = feed;
        self
    }
}

/// Applies mappings to targets of the listed types, or to every target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataRule {
    mappings: MarketDataMappings,
    #[serde(default)]
    target_types: Vec<String>,
}

impl MarketDataRule {
    /// Creates a rule matching any target.
    #[must_use]
    pub fn any_target(mappings: MarketDataMappings) -> Self {
        Self {
            mappings,
            target_types: Vec::new(),
        }
    }

    /// Creates a rule matching the named target types.
    #[must_use]
    pub fn for_target_types<I, S>(mappings: MarketDataMappings, target_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mappings,
            target_types: target_types.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the mappings if the rule applies to the target type.
    #[must_use]
    pub fn mappings_for(&self, target_type: &str) -> Option<&MarketDataMappings> {
        let applies =
            self.target_types.is_empty() || self.target_types.iter().any(|t| t == target_type);
        applies.then_some(&self.mappings)
    }
}

/// An ordered list of rules; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketDataRules(Vec<MarketDataRule>);

impl MarketDataRules {
    /// Creates rules from an ordered list.
    #[must_use]
    pub fn of(rules: Vec<MarketDataRule>) -> Self {
        Self(rules)
    }

    /// Returns rules that match nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the mappings of the first rule applying to the target type.
    #[must_use]
    pub fn mappings_for(&self, target_type: &str) -> Option<&MarketDataMappings> {
        self.0.iter().find_map(|rule| rule.mappings_for(target_type))
    }

    /// Returns the rules in order.
    #[must_use]
    pub fn rules(&self) -> &[MarketDataRule] {
        &self.0
    }
}
