//! The exchange: a symbol-to-stock map with alert dispatch.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::{debug, info};

use alerter_core::{AlerterResult, MarketError};

use crate::alert::Alert;
use crate::stock::Stock;

/// Read-only view of the stocks listed on an exchange.
///
/// This is what rules receive: a snapshot reference they can query but not
/// mutate, handed in explicitly on every evaluation.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeView<'a> {
    stocks: &'a BTreeMap<String, Stock>,
}

impl<'a> ExchangeView<'a> {
    /// Look up a stock by symbol.
    pub fn stock(&self, symbol: &str) -> Option<&'a Stock> {
        self.stocks.get(symbol)
    }

    /// Whether a symbol is listed.
    pub fn contains(&self, symbol: &str) -> bool {
        self.stocks.contains_key(symbol)
    }

    /// Iterate over the listed symbols.
    pub fn symbols(&self) -> impl Iterator<Item = &'a str> {
        self.stocks.keys().map(String::as_str)
    }

    /// Get the number of listed stocks.
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    /// Check if no stocks are listed.
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

/// An alert together with the symbols it watches.
struct ConnectedAlert {
    alert: Alert,
    symbols: BTreeSet<String>,
}

/// Owns the listed stocks and the alerts connected to them.
///
/// `update` is the sole price-injection entry point for alert-bearing
/// hosts: it routes the price into the stock (firing the stock's own
/// "updated" event), then re-evaluates every alert that depends on the
/// updated symbol.
#[derive(Default)]
pub struct Exchange {
    stocks: BTreeMap<String, Stock>,
    alerts: Vec<ConnectedAlert>,
}

impl Exchange {
    /// Create a new empty exchange.
    pub fn new() -> Self {
        Self::default()
    }

    /// List a stock, replacing and returning any previous stock with the
    /// same symbol.
    pub fn list(&mut self, stock: Stock) -> Option<Stock> {
        self.stocks.insert(stock.symbol().to_string(), stock)
    }

    /// Look up a stock by symbol.
    pub fn stock(&self, symbol: &str) -> Option<&Stock> {
        self.stocks.get(symbol)
    }

    /// Look up a stock by symbol, mutably.
    ///
    /// Updates applied directly to the stock still fire its "updated"
    /// event but bypass alert dispatch; route through [`Exchange::update`]
    /// when alerts should see the price.
    pub fn stock_mut(&mut self, symbol: &str) -> Option<&mut Stock> {
        self.stocks.get_mut(symbol)
    }

    /// A read-only view of the listed stocks.
    pub fn view(&self) -> ExchangeView<'_> {
        ExchangeView {
            stocks: &self.stocks,
        }
    }

    /// Connect an alert, watching every symbol its rule depends on.
    pub fn connect(&mut self, alert: Alert) {
        let symbols = alert.rule.depends_on(&self.view());
        debug!(alert = %alert.description, ?symbols, "alert connected");
        self.alerts.push(ConnectedAlert { alert, symbols });
    }

    /// Get the number of connected alerts.
    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }

    /// Record a price for a listed symbol and dispatch alerts.
    ///
    /// The stock insert and its observer fan-out happen first; then every
    /// connected alert depending on the symbol re-evaluates its rule
    /// against a read-only view and runs its action on a match. All of it
    /// completes before this returns.
    pub fn update(
        &mut self,
        symbol: &str,
        timestamp: DateTime<Utc>,
        price: Decimal,
    ) -> AlerterResult<()> {
        let stock = self
            .stocks
            .get_mut(symbol)
            .ok_or_else(|| MarketError::UnknownSymbol(symbol.to_string()))?;
        stock.update(timestamp, price)?;

        let Self { stocks, alerts } = self;
        let view = ExchangeView { stocks };
        for entry in alerts.iter_mut() {
            if !entry.symbols.contains(symbol) {
                continue;
            }
            if entry.alert.rule.matches(&view) {
                info!(alert = %entry.alert.description, symbol, "alert triggered");
                entry.alert.action.execute(&entry.alert.description);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exchange")
            .field("stocks", &self.stocks.len())
            .field("alerts", &self.alerts.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{Action, FnAction, Rule};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2014, 2, day, 0, 0, 0).unwrap()
    }

    /// Rule with a fixed verdict over one symbol.
    struct FixedRule {
        symbol: String,
        verdict: bool,
    }

    impl Rule for FixedRule {
        fn matches(&self, _exchange: &ExchangeView<'_>) -> bool {
            self.verdict
        }

        fn depends_on(&self, _exchange: &ExchangeView<'_>) -> BTreeSet<String> {
            BTreeSet::from([self.symbol.clone()])
        }
    }

    fn counting_action(count: &Rc<RefCell<usize>>) -> Box<dyn Action> {
        let count = Rc::clone(count);
        Box::new(FnAction::new(move |_: &str| *count.borrow_mut() += 1))
    }

    #[test]
    fn test_action_runs_once_per_qualifying_update() {
        let mut exchange = Exchange::new();
        exchange.list(Stock::new("GOOG"));

        let count = Rc::new(RefCell::new(0));
        let rule = Box::new(FixedRule {
            symbol: "GOOG".into(),
            verdict: true,
        });
        Alert::new("sample alert", rule, counting_action(&count)).connect(&mut exchange);

        exchange.update("GOOG", ts(10), dec!(11)).unwrap();
        assert_eq!(*count.borrow(), 1);

        exchange.update("GOOG", ts(11), dec!(12)).unwrap();
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn test_action_does_not_run_when_rule_does_not_match() {
        let mut exchange = Exchange::new();
        exchange.list(Stock::new("GOOG"));

        let count = Rc::new(RefCell::new(0));
        let rule = Box::new(FixedRule {
            symbol: "GOOG".into(),
            verdict: false,
        });
        Alert::new("sample alert", rule, counting_action(&count)).connect(&mut exchange);

        exchange.update("GOOG", ts(10), dec!(11)).unwrap();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_alert_ignores_updates_for_other_symbols() {
        let mut exchange = Exchange::new();
        exchange.list(Stock::new("GOOG"));
        exchange.list(Stock::new("AAPL"));

        let count = Rc::new(RefCell::new(0));
        let rule = Box::new(FixedRule {
            symbol: "GOOG".into(),
            verdict: true,
        });
        Alert::new("goog only", rule, counting_action(&count)).connect(&mut exchange);

        exchange.update("AAPL", ts(10), dec!(500)).unwrap();
        assert_eq!(*count.borrow(), 0);

        exchange.update("GOOG", ts(10), dec!(11)).unwrap();
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_action_receives_the_alert_description() {
        let mut exchange = Exchange::new();
        exchange.list(Stock::new("GOOG"));

        let received = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&received);
        let rule = Box::new(FixedRule {
            symbol: "GOOG".into(),
            verdict: true,
        });
        let action = Box::new(FnAction::new(move |description: &str| {
            *sink.borrow_mut() = description.to_string();
        }));
        Alert::new("sample alert", rule, action).connect(&mut exchange);

        exchange.update("GOOG", ts(10), dec!(11)).unwrap();
        assert_eq!(*received.borrow(), "sample alert");
    }

    #[test]
    fn test_update_for_unknown_symbol_fails() {
        let mut exchange = Exchange::new();
        let err = exchange.update("MSFT", ts(10), dec!(40)).unwrap_err();
        assert!(matches!(
            err,
            alerter_core::AlerterError::Market(MarketError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn test_rejected_update_does_not_dispatch_alerts() {
        let mut exchange = Exchange::new();
        exchange.list(Stock::new("GOOG"));

        let count = Rc::new(RefCell::new(0));
        let rule = Box::new(FixedRule {
            symbol: "GOOG".into(),
            verdict: true,
        });
        Alert::new("sample alert", rule, counting_action(&count)).connect(&mut exchange);

        assert!(exchange.update("GOOG", ts(10), dec!(-1)).is_err());
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_listing_replaces_a_stock_with_the_same_symbol() {
        let mut exchange = Exchange::new();
        let mut first = Stock::new("GOOG");
        first.update(ts(10), dec!(11)).unwrap();
        exchange.list(first);

        let previous = exchange.list(Stock::new("GOOG")).unwrap();
        assert_eq!(previous.price(), Some(dec!(11)));
        assert!(exchange.stock("GOOG").unwrap().price().is_none());
    }
}
