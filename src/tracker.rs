//! Price tracker
//!
//! Owns the sample queue and the baseline used for tinting, and drives the
//! fetch/render loop until shutdown.

use crate::config::ConfigError;
use crate::feed::{FetchError, PriceSource};
use crate::queue::BoundedQueue;
use crate::render::{self, LiveWriter};
use crate::sample::{Sample, Tint};
use chrono::Local;
use rust_decimal::Decimal;
use std::future::Future;
use std::io::Write;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Local wall clock formatted for the timestamp row
pub fn clock_timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Rolling window of the most recent price samples
pub struct Tracker {
    samples: BoundedQueue<Sample>,
    /// Last real price; failed rounds never replace it
    last_price: Option<Decimal>,
}

impl Tracker {
    /// Create a tracker showing `bucket` columns
    ///
    /// The window starts with `bucket - 1` placeholders so the table is full
    /// width as soon as the first quote arrives.
    pub fn new(bucket: usize) -> Result<Self, ConfigError> {
        let mut samples = BoundedQueue::new(bucket)?;
        for _ in 1..bucket {
            samples.push_back(Sample::placeholder());
        }

        Ok(Self {
            samples,
            last_price: None,
        })
    }

    /// Record the outcome of one fetch round and return the stored sample
    pub fn record(
        &mut self,
        result: Result<Decimal, FetchError>,
        timestamp: impl Into<String>,
    ) -> &Sample {
        let sample = match result {
            Ok(price) => {
                let tint = Tint::between(self.last_price, price);
                Sample::quote(price, timestamp, tint)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Price fetch failed");
                Sample::failed(timestamp)
            }
        };

        if sample.is_quote() {
            self.last_price = Some(sample.price);
        }

        tracing::debug!(
            price = %sample.price,
            timestamp = %sample.timestamp,
            tint = ?sample.tint,
            "Recorded sample"
        );

        self.samples.push_back_ref(sample)
    }

    /// Current window, oldest first
    pub fn snapshot(&self) -> Vec<Sample> {
        self.samples.snapshot()
    }

    pub fn last_price(&self) -> Option<Decimal> {
        self.last_price
    }

    pub fn bucket(&self) -> usize {
        self.samples.capacity()
    }

    /// Redraw the table from the current window
    pub fn render<W: Write>(&self, writer: &mut LiveWriter<W>, color: bool) {
        let rows = render::format_rows(&self.snapshot(), color);
        if let Err(e) = writer.repaint(&rows) {
            tracing::warn!(error = %e, "Failed to repaint table");
        }
    }

    /// Fetch, record and redraw every `interval` until `shutdown` resolves
    ///
    /// The first round runs immediately. A fetch still in flight when
    /// shutdown fires is abandoned.
    pub async fn run<S, W, F>(
        &mut self,
        source: &S,
        writer: &mut LiveWriter<W>,
        interval: Duration,
        color: bool,
        shutdown: F,
    ) where
        S: PriceSource + ?Sized,
        W: Write,
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        tracing::info!(
            interval_secs = interval.as_secs(),
            bucket = self.bucket(),
            "Tracker started"
        );

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    let fetched = tokio::select! {
                        biased;
                        _ = &mut shutdown => None,
                        result = source.fetch_price() => Some(result),
                    };
                    let Some(result) = fetched else { break };

                    self.record(result, clock_timestamp());
                    self.render(writer, color);
                }
            }
        }

        if let Err(e) = writer.flush() {
            tracing::warn!(error = %e, "Failed to flush terminal");
        }
        tracing::info!("Tracker stopped");
    }
}
