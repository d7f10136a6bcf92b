//! btc-tracker: track the BTC spot price in real time from a terminal
//!
//! This library provides:
//! - A fixed-capacity FIFO queue holding the most recent samples
//! - Price samples with up/down tinting
//! - A Coinbase spot price client
//! - A two-row table renderer that repaints in place
//! - The polling loop tying them together

pub mod cli;
pub mod config;
pub mod feed;
pub mod queue;
pub mod render;
pub mod sample;
pub mod telemetry;
pub mod tracker;
