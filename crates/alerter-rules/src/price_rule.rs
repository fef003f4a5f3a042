//! Rule over a single stock's latest price.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use alerter_market::{ExchangeView, Rule};

/// Matches when one symbol's latest price satisfies a predicate.
///
/// A stock with no price yet never matches.
pub struct PriceRule {
    symbol: String,
    predicate: Box<dyn Fn(Decimal) -> bool>,
}

impl PriceRule {
    /// Create a rule from an arbitrary price predicate.
    pub fn new(symbol: impl Into<String>, predicate: impl Fn(Decimal) -> bool + 'static) -> Self {
        Self {
            symbol: symbol.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Matches when the latest price is strictly above `threshold`.
    pub fn above(symbol: impl Into<String>, threshold: Decimal) -> Self {
        Self::new(symbol, move |price| price > threshold)
    }

    /// Matches when the latest price is strictly below `threshold`.
    pub fn below(symbol: impl Into<String>, threshold: Decimal) -> Self {
        Self::new(symbol, move |price| price < threshold)
    }

    /// Get the watched symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl Rule for PriceRule {
    fn matches(&self, exchange: &ExchangeView<'_>) -> bool {
        exchange
            .stock(&self.symbol)
            .and_then(|stock| stock.price())
            .is_some_and(|price| (self.predicate)(price))
    }

    fn depends_on(&self, _exchange: &ExchangeView<'_>) -> BTreeSet<String> {
        BTreeSet::from([self.symbol.clone()])
    }
}

impl std::fmt::Debug for PriceRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceRule")
            .field("symbol", &self.symbol)
            .finish()
    }
}
