//! Stock actions.

use tracing::info;

use alerter_market::Action;

/// Logs the alert description at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAction;

impl Action for LogAction {
    fn execute(&mut self, description: &str) {
        info!(alert = description, "alert fired");
    }
}
