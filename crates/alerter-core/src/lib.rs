//! Core types and errors for the stock alerter.
//!
//! This crate provides the foundational building blocks including:
//! - Price observations and the ordered time series that holds them
//! - The crossover signal enumeration
//! - Error types shared across the workspace

pub mod error;
pub mod types;

pub use error::{AlerterError, AlerterResult, IndicatorError, MarketError};
pub use types::*;
