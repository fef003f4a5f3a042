//! Rule over a stock's moving-average crossover signal.

use std::collections::BTreeSet;

use alerter_core::StockSignal;
use alerter_market::{ExchangeView, Rule};

/// Matches when one symbol's crossover signal equals a target signal.
///
/// The signal is evaluated on the calendar day of the stock's latest
/// observation; a stock with no history never matches.
#[derive(Debug, Clone)]
pub struct CrossoverRule {
    symbol: String,
    signal: StockSignal,
}

impl CrossoverRule {
    /// Create a rule watching `symbol` for `signal`.
    pub fn new(symbol: impl Into<String>, signal: StockSignal) -> Self {
        Self {
            symbol: symbol.into(),
            signal,
        }
    }

    /// Watch for a golden cross.
    pub fn golden_cross(symbol: impl Into<String>) -> Self {
        Self::new(symbol, StockSignal::Buy)
    }

    /// Watch for a death cross.
    pub fn death_cross(symbol: impl Into<String>) -> Self {
        Self::new(symbol, StockSignal::Sell)
    }
}

impl Rule for CrossoverRule {
    fn matches(&self, exchange: &ExchangeView<'_>) -> bool {
        let Some(stock) = exchange.stock(&self.symbol) else {
            return false;
        };
        let Some(latest) = stock.history().latest() else {
            return false;
        };
        stock.crossover_signal(latest.date()) == self.signal
    }

    fn depends_on(&self, _exchange: &ExchangeView<'_>) -> BTreeSet<String> {
        BTreeSet::from([self.symbol.clone()])
    }
}
