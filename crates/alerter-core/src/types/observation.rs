//! A single timestamped price observation.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price observation for an instrument.
///
/// Uses `Decimal` for exact arithmetic. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceObservation {
    /// When the price was observed
    pub timestamp: DateTime<Utc>,
    /// The observed price
    pub price: Decimal,
}

impl PriceObservation {
    /// Create a new observation.
    pub fn new(timestamp: DateTime<Utc>, price: Decimal) -> Self {
        Self { timestamp, price }
    }

    /// The calendar day this observation falls on (UTC).
    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    #[test]
    fn test_observation_date_bucket() {
        let obs = PriceObservation::new(
            Utc.with_ymd_and_hms(2014, 2, 12, 14, 30, 0).unwrap(),
            dec!(10.5),
        );

        assert_eq!(obs.date(), NaiveDate::from_ymd_opt(2014, 2, 12).unwrap());
        assert_eq!(obs.price, dec!(10.5));
    }
}
