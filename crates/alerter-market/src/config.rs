//! Crossover window configuration.

use serde::{Deserialize, Serialize};

use alerter_core::AlerterError;

use crate::stock::{LONG_TERM_TIMESPAN, SHORT_TERM_TIMESPAN};

/// Configuration for the crossover signal windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverConfig {
    /// Short-term moving average timespan in days
    pub short_period: usize,
    /// Long-term moving average timespan in days
    pub long_period: usize,
}

impl Default for CrossoverConfig {
    fn default() -> Self {
        Self {
            short_period: SHORT_TERM_TIMESPAN,
            long_period: LONG_TERM_TIMESPAN,
        }
    }
}

impl CrossoverConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), AlerterError> {
        if self.short_period == 0 {
            return Err(AlerterError::Validation(
                "Short period must be greater than 0".into(),
            ));
        }
        if self.short_period >= self.long_period {
            return Err(AlerterError::Validation(
                "Short period must be less than long period".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CrossoverConfig::default();
        assert_eq!(config.short_period, 5);
        assert_eq!(config.long_period, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = CrossoverConfig {
            short_period: 20,
            long_period: 10,
        };
        assert!(config.validate().is_err());

        let config = CrossoverConfig {
            short_period: 0,
            long_period: 10,
        };
        assert!(config.validate().is_err());
    }
}
