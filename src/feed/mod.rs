//! Price feed module
//!
//! Provides the current spot price from the Coinbase REST API

mod coinbase;
mod types;

pub use coinbase::{CoinbaseClient, CoinbaseConfig, COINBASE_API_URL};
pub use types::FetchError;

use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for spot price sources
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current spot price
    ///
    /// A successful result is always strictly positive.
    async fn fetch_price(&self) -> Result<Decimal, FetchError>;
}
