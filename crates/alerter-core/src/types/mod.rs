//! Core data types for the stock alerter.

mod observation;
mod series;
mod signal;

pub use observation::PriceObservation;
pub use series::TimeSeries;
pub use signal::StockSignal;
