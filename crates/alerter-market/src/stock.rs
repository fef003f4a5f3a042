//! A single instrument's price history and signal queries.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use alerter_core::{AlerterResult, MarketError, StockSignal, TimeSeries};
use alerter_events::Event;
use alerter_indicators::MovingAverage;

use crate::config::CrossoverConfig;

/// Default long-term moving average timespan in days.
pub const LONG_TERM_TIMESPAN: usize = 10;
/// Default short-term moving average timespan in days.
pub const SHORT_TERM_TIMESPAN: usize = 5;

/// Payload fired on every accepted price update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockUpdate {
    /// Symbol of the updated stock
    pub symbol: String,
    /// Timestamp of the new observation
    pub timestamp: DateTime<Utc>,
    /// The new price
    pub price: Decimal,
}

/// One instrument: a symbol, its price history, and its update event.
#[derive(Debug)]
pub struct Stock {
    symbol: String,
    history: TimeSeries,
    updated: Event<StockUpdate>,
    config: CrossoverConfig,
}

impl Stock {
    /// Create a new stock with an empty history and the default
    /// crossover windows.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            history: TimeSeries::new(),
            updated: Event::new(),
            config: CrossoverConfig::default(),
        }
    }

    /// Create a stock with custom crossover windows.
    pub fn with_config(symbol: impl Into<String>, config: CrossoverConfig) -> AlerterResult<Self> {
        config.validate()?;
        Ok(Self {
            symbol: symbol.into(),
            history: TimeSeries::new(),
            updated: Event::new(),
            config,
        })
    }

    /// Get the stock's symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Get the price history.
    pub fn history(&self) -> &TimeSeries {
        &self.history
    }

    /// The "updated" event; observers subscribe here.
    pub fn updated(&mut self) -> &mut Event<StockUpdate> {
        &mut self.updated
    }

    /// The latest price by timestamp, or `None` for an empty history.
    pub fn price(&self) -> Option<Decimal> {
        self.history.latest().map(|obs| obs.price)
    }

    /// Record a new price observation and fire the "updated" event.
    ///
    /// Fails with [`MarketError::NegativePrice`] for a negative price;
    /// nothing is inserted and no event fires. Otherwise every subscriber
    /// runs synchronously before this returns.
    pub fn update(&mut self, timestamp: DateTime<Utc>, price: Decimal) -> Result<(), MarketError> {
        if price < Decimal::ZERO {
            return Err(MarketError::NegativePrice { price });
        }
        self.history.update(timestamp, price);
        debug!(symbol = %self.symbol, %price, %timestamp, "price updated");

        let update = StockUpdate {
            symbol: self.symbol.clone(),
            timestamp,
            price,
        };
        self.updated.fire(&update);
        Ok(())
    }

    /// Whether the three most recent observations are strictly increasing.
    ///
    /// Ordered by timestamp, not calendar date. Fails with
    /// [`MarketError::InsufficientHistory`] below three observations.
    pub fn is_increasing_trend(&self) -> Result<bool, MarketError> {
        if self.history.len() < 3 {
            return Err(MarketError::InsufficientHistory {
                required: 3,
                available: self.history.len(),
            });
        }
        let recent = self.history.last_n(3);
        Ok(recent[0].price < recent[1].price && recent[1].price < recent[2].price)
    }

    /// Classify the moving-average crossover on `on_date`.
    ///
    /// Conventional golden/death-cross semantics: `Buy` when the short-term
    /// average crosses from below to strictly above the long-term average
    /// between the previous day and `on_date`, `Sell` for the mirror cross,
    /// `Neutral` otherwise. When the history cannot resolve all four
    /// windows the query degrades to `Neutral` rather than failing.
    pub fn crossover_signal(&self, on_date: NaiveDate) -> StockSignal {
        let prev_date = on_date - Days::new(1);
        let long_term = MovingAverage::new(&self.history, self.config.long_period);
        let short_term = MovingAverage::new(&self.history, self.config.short_period);

        let values = (
            long_term.value_on(on_date),
            long_term.value_on(prev_date),
            short_term.value_on(on_date),
            short_term.value_on(prev_date),
        );
        let (Ok(long_ma), Ok(prev_long_ma), Ok(short_ma), Ok(prev_short_ma)) = values else {
            return StockSignal::Neutral;
        };

        if crossed_above(prev_short_ma, prev_long_ma, short_ma, long_ma) {
            return StockSignal::Buy;
        }
        if crossed_above(prev_long_ma, prev_short_ma, long_ma, short_ma) {
            return StockSignal::Sell;
        }
        StockSignal::Neutral
    }
}

/// Whether a series crossed from strictly below its reference to strictly
/// above it between two evaluations.
fn crossed_above(
    prev: Decimal,
    prev_reference: Decimal,
    current: Decimal,
    current_reference: Decimal,
) -> bool {
    prev < prev_reference && current > current_reference
}
