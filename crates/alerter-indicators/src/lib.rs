//! Indicators computed over a price [`TimeSeries`].
//!
//! Unlike bar-stream indicators that slide over contiguous samples, these
//! operate on calendar days: each day contributes its closing price, with
//! the last known price carried forward into days without observations.
//!
//! [`TimeSeries`]: alerter_core::TimeSeries

pub mod moving_average;

pub use moving_average::MovingAverage;
