//! Time-ordered price series with date-bucketed closing-price queries.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::PriceObservation;

/// An ordered, timestamp-keyed sequence of price observations.
///
/// Observations are kept sorted ascending by timestamp at all times;
/// insertion locates the slot with a binary search rather than appending
/// and re-sorting. Duplicate timestamps are retained in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    observations: Vec<PriceObservation>,
}

impl TimeSeries {
    /// Create a new empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new observation, preserving ascending timestamp order.
    ///
    /// O(log n) locate + O(n) shift. An observation with a timestamp equal
    /// to existing ones lands after them, so ties keep insertion order.
    pub fn update(&mut self, timestamp: DateTime<Utc>, price: Decimal) {
        let at = self
            .observations
            .partition_point(|obs| obs.timestamp <= timestamp);
        self.observations
            .insert(at, PriceObservation::new(timestamp, price));
    }

    /// The observation with the greatest timestamp, or `None` when empty.
    pub fn latest(&self) -> Option<&PriceObservation> {
        self.observations.last()
    }

    /// Get the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Get an observation by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&PriceObservation> {
        self.observations.get(index)
    }

    /// Get the last N observations, oldest first.
    pub fn last_n(&self, n: usize) -> &[PriceObservation] {
        let start = self.observations.len().saturating_sub(n);
        &self.observations[start..]
    }

    /// Get an iterator over the observations, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PriceObservation> {
        self.observations.iter()
    }

    /// Closing prices for the `num_days` calendar days ending at `end_date`
    /// inclusive, ordered oldest to newest.
    ///
    /// A day's closing price is the most recent observation dated on or
    /// before that day, so the last known price carries forward into days
    /// without observations. Days preceding the first observation resolve
    /// to nothing, so the result may be shorter than `num_days`; callers
    /// must check the returned length against the request.
    pub fn closing_prices(&self, end_date: NaiveDate, num_days: usize) -> Vec<PriceObservation> {
        let mut closes = Vec::with_capacity(num_days);
        for back in (0..num_days as u64).rev() {
            let day = end_date - Days::new(back);
            if let Some(obs) = self.closing_price_on(day) {
                closes.push(*obs);
            }
        }
        closes
    }

    /// The observation acting as `day`'s closing price, if any exists on
    /// or before that day.
    pub fn closing_price_on(&self, day: NaiveDate) -> Option<&PriceObservation> {
        let at = self
            .observations
            .partition_point(|obs| obs.date() <= day);
        at.checked_sub(1).map(|i| &self.observations[i])
    }
}

impl FromIterator<PriceObservation> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = PriceObservation>>(iter: T) -> Self {
        let mut series = Self::new();
        for obs in iter {
            series.update(obs.timestamp, obs.price);
        }
        series
    }
}
