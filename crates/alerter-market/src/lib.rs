//! Stocks, the exchange, and update-triggered alert dispatch.
//!
//! A [`Stock`] owns one instrument's price history and classifies
//! moving-average crossovers; an [`Exchange`] owns the symbol-to-stock map
//! and runs connected [`Alert`]s synchronously whenever a price update for
//! a symbol they depend on arrives.
//!
//! Everything here is single-threaded by design: an update, its observer
//! fan-out, rule evaluation, and action execution all complete on the
//! caller's thread before the update returns. Hosts that share a stock
//! across threads must serialize access themselves.

pub mod alert;
pub mod config;
pub mod exchange;
pub mod stock;

pub use alert::{Action, Alert, FnAction, Rule};
pub use config::CrossoverConfig;
pub use exchange::{Exchange, ExchangeView};
pub use stock::{Stock, StockUpdate, LONG_TERM_TIMESPAN, SHORT_TERM_TIMESPAN};
