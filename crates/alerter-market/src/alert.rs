//! Alerts: a rule wired to an action.

use std::collections::BTreeSet;

use crate::exchange::{Exchange, ExchangeView};

/// A predicate over the stocks listed on an exchange.
///
/// Rules are evaluated against a read-only view of the exchange, passed in
/// explicitly on every evaluation. `depends_on` names the symbols whose
/// updates should trigger re-evaluation.
pub trait Rule {
    /// Whether the rule currently holds.
    fn matches(&self, exchange: &ExchangeView<'_>) -> bool;

    /// The symbols this rule needs to watch.
    fn depends_on(&self, exchange: &ExchangeView<'_>) -> BTreeSet<String>;
}

/// A side effect invoked when an alert's rule matches.
pub trait Action {
    /// Run the action, given the alert's description.
    fn execute(&mut self, description: &str);
}

/// Adapter turning any `FnMut(&str)` closure into an [`Action`].
pub struct FnAction<F>(F);

impl<F: FnMut(&str)> FnAction<F> {
    /// Wrap a closure as an action.
    pub fn new(callback: F) -> Self {
        Self(callback)
    }
}

impl<F: FnMut(&str)> Action for FnAction<F> {
    fn execute(&mut self, description: &str) {
        (self.0)(description)
    }
}

/// A rule and the action to run when it matches.
pub struct Alert {
    pub(crate) description: String,
    pub(crate) rule: Box<dyn Rule>,
    pub(crate) action: Box<dyn Action>,
}

impl Alert {
    /// Create a new alert.
    pub fn new(
        description: impl Into<String>,
        rule: Box<dyn Rule>,
        action: Box<dyn Action>,
    ) -> Self {
        Self {
            description: description.into(),
            rule,
            action,
        }
    }

    /// Get the alert's description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Wire this alert to the exchange.
    ///
    /// The alert watches every symbol its rule depends on; each qualifying
    /// update through [`Exchange::update`] re-evaluates the rule and runs
    /// the action on a match, synchronously, before the update returns.
    pub fn connect(self, exchange: &mut Exchange) {
        exchange.connect(self);
    }
}

impl std::fmt::Debug for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("description", &self.description)
            .finish()
    }
}
