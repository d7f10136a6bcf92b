//! Track command implementation

use crate::config::Config;
use crate::feed::{CoinbaseClient, CoinbaseConfig};
use crate::render::LiveWriter;
use crate::tracker::Tracker;

/// Run the tracker against Coinbase until Ctrl-C
pub async fn track(config: &Config) -> anyhow::Result<()> {
    let client = CoinbaseClient::with_config(CoinbaseConfig::from(&config.feed))?;
    let mut tracker = Tracker::new(config.tracker.bucket)?;
    let mut writer = LiveWriter::stdout();

    tracing::info!(pair = %client.pair(), "Tracking spot price");

    tracker
        .run(
            &client,
            &mut writer,
            config.tracker.interval(),
            config.tracker.color,
            shutdown_signal(),
        )
        .await;

    Ok(())
}

/// Resolves on the first Ctrl-C
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Interrupt received, shutting down"),
        Err(e) => {
            // Without a signal handler there is nothing left to wait for
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    }
}
