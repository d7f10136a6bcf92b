//! CLI interface for btc-tracker
//!
//! A single command: fetch the spot price every `--interval` seconds and keep
//! the last `--bucket` points on screen until Ctrl-C.

mod track;

pub use track::{shutdown_signal, track};

use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "btc-tracker")]
#[command(about = "Track BTC price in real-time")]
#[command(
    long_about = "Tracks the spot price of BTC in real-time right from your terminal, \
                  coloring increases green and decreases red."
)]
#[command(version)]
pub struct Cli {
    /// Interval between each refresh, in seconds [default: 10]
    #[arg(long)]
    pub interval: Option<u64>,

    /// Number of price points to keep on screen [default: 10]
    #[arg(long)]
    pub bucket: Option<usize>,

    /// Currency pair to track [default: BTC-USD]
    #[arg(long)]
    pub pair: Option<String>,

    /// Print prices without color
    #[arg(long)]
    pub no_color: bool,

    /// Log filter, e.g. "debug" or "btc_tracker=trace"
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "btc-tracker.toml")]
    pub config: PathBuf,
}

impl Cli {
    /// Overlay command line flags onto `config`
    pub fn apply(&self, config: &mut Config) {
        if let Some(interval) = self.interval {
            config.tracker.interval_secs = interval;
        }
        if let Some(bucket) = self.bucket {
            config.tracker.bucket = bucket;
        }
        if let Some(ref pair) = self.pair {
            config.feed.pair = pair.clone();
        }
        if self.no_color {
            config.tracker.color = false;
        }
        if let Some(ref level) = self.log_level {
            config.telemetry.log_level = level.clone();
        }
    }

    /// Load the config file, apply flags and validate the result
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load_or_default(&self.config)?;
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }
}
