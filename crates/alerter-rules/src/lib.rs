//! Concrete alert rules and actions.
//!
//! Any type can implement [`Rule`] or [`Action`]; these are the stock
//! implementations: a latest-price predicate, a crossover-signal match,
//! and an action that logs the alert.
//!
//! [`Rule`]: alerter_market::Rule
//! [`Action`]: alerter_market::Action

pub mod actions;
pub mod crossover_rule;
pub mod price_rule;

pub use actions::LogAction;
pub use crossover_rule::CrossoverRule;
pub use price_rule::PriceRule;
