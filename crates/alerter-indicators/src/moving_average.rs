//! Simple moving average over daily closing prices.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use alerter_core::{IndicatorError, TimeSeries};

/// Arithmetic mean of the closing prices for the last `timespan` calendar
/// days ending at a given date.
///
/// A stateless view over a borrowed series; construct one per query.
#[derive(Debug, Clone, Copy)]
pub struct MovingAverage<'a> {
    series: &'a TimeSeries,
    timespan: usize,
}

impl<'a> MovingAverage<'a> {
    /// Create a new moving average with the specified timespan.
    pub fn new(series: &'a TimeSeries, timespan: usize) -> Self {
        assert!(timespan > 0, "Timespan must be greater than 0");
        Self { series, timespan }
    }

    /// Get the timespan in days.
    pub fn timespan(&self) -> usize {
        self.timespan
    }

    /// The average closing price over the `timespan` days ending at
    /// `end_date` inclusive.
    ///
    /// Fails with [`IndicatorError::NotEnoughData`] when the series cannot
    /// resolve a closing price for every requested day.
    pub fn value_on(&self, end_date: NaiveDate) -> Result<Decimal, IndicatorError> {
        let closes = self.series.closing_prices(end_date, self.timespan);
        if closes.len() < self.timespan {
            return Err(IndicatorError::NotEnoughData {
                required: self.timespan,
                available: closes.len(),
            });
        }

        let sum: Decimal = closes.iter().map(|obs| obs.price).sum();
        Ok(sum / Decimal::from(self.timespan as u64))
    }
}
