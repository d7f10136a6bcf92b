//! Price feed types

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from fetching a spot price
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or timeout
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("Price API error: {status} - {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Body was not the expected JSON shape
    #[error("Failed to decode price response: {0}")]
    Decode(#[from] serde_json::Error),
    /// Response carried no amount
    #[error("Empty response from price API")]
    MissingAmount,
    /// Amount was not a decimal number
    #[error("Invalid price amount: {0}")]
    InvalidAmount(String),
    /// Amount was zero or negative
    #[error("Non-positive price: {0}")]
    NonPositive(Decimal),
}
