//! Crossover signal classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading signal derived from a moving-average crossover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockSignal {
    /// Short-term average crossed above the long-term average (golden cross)
    Buy,
    /// Short-term average crossed below the long-term average (death cross)
    Sell,
    /// No crossover, or not enough history to tell
    #[default]
    Neutral,
}

impl fmt::Display for StockSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockSignal::Buy => write!(f, "buy"),
            StockSignal::Sell => write!(f, "sell"),
            StockSignal::Neutral => write!(f, "neutral"),
        }
    }
}
