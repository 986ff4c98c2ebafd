//! Date-ordered time series of observed values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::RangeBounds;
use strata_basics::Date;

/// A series of values keyed and ordered by date, at most one per date.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateDoubleTimeSeries {
    points: BTreeMap<Date, f64>,
}

impl DateDoubleTimeSeries {
    /// Returns an empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Creates a series from date/value pairs.
    ///
    /// A later pair replaces an earlier one for the same date.
    pub fn of(points: impl IntoIterator<Item = (Date, f64)>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Returns a copy with the point added or replaced.
    #[must_use]
    pub fn with_point(&self, date: Date, value: f64) -> Self {
        let mut points = self.points.clone();
        points.insert(date, value);
        Self { points }
    }

    /// Returns the value on a date.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<f64> {
        self.points.get(&date).copied()
    }

    /// Returns true if the series has a value on the date.
    #[must_use]
    pub fn contains_date(&self, date: Date) -> bool {
        self.points.contains_key(&date)
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the earliest point.
    #[must_use]
    pub fn earliest(&self) -> Option<(Date, f64)> {
        self.points.iter().next().map(|(d, v)| (*d, *v))
    }

    /// Returns the latest point.
    #[must_use]
    pub fn latest(&self) -> Option<(Date, f64)> {
        self.points.iter().next_back().map(|(d, v)| (*d, *v))
    }

    /// Returns the points within a date range.
    #[must_use]
    pub fn subseries(&self, range: impl RangeBounds<Date>) -> Self {
        Self {
            points: self.points.range(range).map(|(d, v)| (*d, *v)).collect(),
        }
    }

    /// Iterates over the points in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.points.iter().map(|(d, v)| (*d, *v))
    }

    /// Returns the dates in order.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        self.points.keys().copied().collect()
    }

    /// Returns the values in date order.
    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.points.values().copied().collect()
    }
}

impl FromIterator<(Date, f64)> for DateDoubleTimeSeries {
    fn from_iter<I: IntoIterator<Item = (Date, f64)>>(iter: I) -> Self {
        Self::of(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> Date {
        Date::from_ymd(2015, 3, day).unwrap()
    }

    #[test]
    fn test_ordering() {
        let series = DateDoubleTimeSeries::of([(date(5), 0.3), (date(2), 0.1), (date(3), 0.2)]);
        assert_eq!(series.dates(), vec![date(2), date(3), date(5)]);
        assert_eq!(series.earliest(), Some((date(2), 0.1)));
        assert_eq!(series.latest(), Some((date(5), 0.3)));
    }

    #[test]
    fn test_subseries_and_lookup() {
        let series: DateDoubleTimeSeries = (1..=10).map(|d| (date(d), f64::from(d))).collect();
        let sub = series.subseries(date(3)..date(6));
        assert_eq!(sub.values(), vec![3.0, 4.0, 5.0]);
        assert_eq!(series.get(date(7)), Some(7.0));
        assert_eq!(series.get(date(11)), None);
        assert!(DateDoubleTimeSeries::empty().is_empty());
    }

    #[test]
    fn test_with_point_replaces() {
        let series = DateDoubleTimeSeries::of([(date(2), 0.1)]).with_point(date(2), 0.5);
        assert_eq!(series.len(), 1);
        assert_eq!(series.get(date(2)), Some(0.5));
    }
}
