use btc_tracker::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        // Usage errors exit 1; --help and --version exit 0
        std::process::exit(if e.use_stderr() { 1 } else { 0 });
    });

    let config = cli.load_config()?;

    // Initialize telemetry
    btc_tracker::telemetry::init_telemetry(&config.telemetry)?;

    tracing::debug!(
        path = %cli.config.display(),
        from_file = cli.config.exists(),
        "Configuration loaded"
    );
    tracing::info!(
        interval_secs = config.tracker.interval_secs,
        bucket = config.tracker.bucket,
        "Starting btc-tracker"
    );

    btc_tracker::cli::track(&config).await?;

    Ok(())
}
