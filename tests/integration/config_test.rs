//! Integration tests for configuration loading

use btc_tracker::cli::Cli;
use btc_tracker::config::{Config, ConfigError, LogFormat};
use clap::Parser;
use std::io::Write;

#[test]
fn test_config_file_with_cli_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [feed]
        pair = "BTC-EUR"

        [tracker]
        interval_secs = 30
        bucket = 4

        [telemetry]
        log_format = "json"
        "#
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let cli = Cli::try_parse_from(["btc-tracker", "--config", &path, "--bucket", "6"]).unwrap();
    let config = cli.load_config().unwrap();

    assert_eq!(config.feed.pair, "BTC-EUR");
    assert_eq!(config.tracker.interval_secs, 30);
    assert_eq!(config.tracker.bucket, 6);
    assert_eq!(config.telemetry.log_format, LogFormat::Json);
}

#[test]
fn test_invalid_bucket_in_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[tracker]\nbucket = 0").unwrap();

    let config = Config::load(file.path()).unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCapacity(0))
    ));
}
