//! Error types for the stock alerter.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level alerter error.
#[derive(Error, Debug)]
pub enum AlerterError {
    #[error("Market error: {0}")]
    Market(#[from] MarketError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised by stocks and the exchange.
#[derive(Error, Debug)]
pub enum MarketError {
    #[error("Price must not be negative, got {price}")]
    NegativePrice { price: Decimal },

    #[error("Insufficient history: need {required} observations, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    #[error("Symbol not listed: {0}")]
    UnknownSymbol(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Not enough data: need {required} closing prices, have {available}")]
    NotEnoughData { required: usize, available: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for alerter operations.
pub type AlerterResult<T> = Result<T, AlerterError>;
