//! Coinbase spot price client

use super::{FetchError, PriceSource};
use crate::config::FeedConfig;
use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

/// Coinbase API base URL
pub const COINBASE_API_URL: &str = "https://api.coinbase.com";

/// Configuration for the Coinbase client
#[derive(Debug, Clone)]
pub struct CoinbaseConfig {
    /// Base URL for the Coinbase API
    pub base_url: String,
    /// Currency pair (e.g., "BTC-USD")
    pub pair: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for CoinbaseConfig {
    fn default() -> Self {
        Self {
            base_url: COINBASE_API_URL.to_string(),
            pair: "BTC-USD".to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl From<&FeedConfig> for CoinbaseConfig {
    fn from(config: &FeedConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            pair: config.pair.clone(),
            timeout: config.timeout(),
            ..Self::default()
        }
    }
}

/// Client for the Coinbase spot price endpoint
pub struct CoinbaseClient {
    config: CoinbaseConfig,
    client: Client,
}

impl CoinbaseClient {
    /// Create a client for BTC-USD with default settings
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(CoinbaseConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: CoinbaseConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    pub fn pair(&self) -> &str {
        &self.config.pair
    }

    /// Build the spot price URL for the configured pair
    fn spot_url(&self) -> String {
        format!("{}/v2/prices/{}/spot", self.config.base_url, self.config.pair)
    }
}

#[async_trait]
impl PriceSource for CoinbaseClient {
    async fn fetch_price(&self) -> Result<Decimal, FetchError> {
        let url = self.spot_url();

        tracing::debug!(url = %url, "Fetching spot price");

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        let price = parse_spot_price(&body)?;

        tracing::debug!(pair = %self.config.pair, %price, "Fetched spot price");

        Ok(price)
    }
}

/// Spot price response body
#[derive(Debug, Deserialize)]
struct SpotResponse {
    data: Option<SpotData>,
}

#[derive(Debug, Deserialize)]
struct SpotData {
    amount: Option<String>,
    /// Base currency (e.g., "BTC")
    #[allow(dead_code)]
    base: Option<String>,
    /// Quote currency (e.g., "USD")
    #[allow(dead_code)]
    currency: Option<String>,
}

/// Parse the amount out of a spot price response
///
/// Format: `{"data": {"amount": "64123.45", "base": "BTC", "currency": "USD"}}`
fn parse_spot_price(body: &str) -> Result<Decimal, FetchError> {
    let response: SpotResponse = serde_json::from_str(body)?;

    let amount = response
        .data
        .and_then(|d| d.amount)
        .ok_or(FetchError::MissingAmount)?;

    let price =
        Decimal::from_str(amount.trim()).map_err(|_| FetchError::InvalidAmount(amount.clone()))?;

    if price <= Decimal::ZERO {
        return Err(FetchError::NonPositive(price));
    }

    Ok(price)
}
