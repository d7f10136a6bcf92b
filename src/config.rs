//! Configuration types for btc-tracker

use crate::feed::COINBASE_API_URL;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors; all of them are fatal at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Queue capacity must be at least one
    #[error("Invalid bucket size {0}: must be at least 1")]
    InvalidCapacity(usize),
    /// Refresh interval must be at least one second
    #[error("Invalid interval {0}s: must be at least 1")]
    InvalidInterval(u64),
    /// Config file could not be read
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    /// Config file is not valid TOML for this schema
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub feed: FeedConfig,
    pub tracker: TrackerConfig,
    pub telemetry: TelemetryConfig,
}

/// Price feed configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub base_url: String,
    /// Currency pair, e.g. "BTC-USD"
    pub pair: String,
    pub timeout_secs: u64,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: COINBASE_API_URL.to_string(),
            pair: "BTC-USD".to_string(),
            timeout_secs: 10,
        }
    }
}

impl FeedConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Sampling and display configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Seconds between fetches
    pub interval_secs: u64,
    /// Number of price points retained and shown
    pub bucket: usize,
    /// Colorize rising/falling prices
    pub color: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            interval_secs: 10,
            bucket: 10,
            color: true,
        }
    }
}

impl TrackerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject values the tracker cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tracker.bucket == 0 {
            return Err(ConfigError::InvalidCapacity(self.tracker.bucket));
        }
        if self.tracker.interval_secs == 0 {
            return Err(ConfigError::InvalidInterval(self.tracker.interval_secs));
        }
        Ok(())
    }
}
