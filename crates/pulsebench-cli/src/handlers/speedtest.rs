//! Speedtest command handler.

use std::sync::Arc;

use anyhow::Result;
use pulsebench_metrics::{
    CommandSource, InfluxSink, Publisher, SinkConfig, SpeedtestConfig, SpeedtestFormat,
    format_float,
};

use crate::error::CliError;

/// Run one speed test and publish it to the CSV log and the sink.
pub async fn execute() -> Result<()> {
    let config = SpeedtestConfig::from_env();
    // Resolve sink credentials before spending time on the measurement.
    let sink = InfluxSink::new(SinkConfig::from_env().map_err(CliError::from)?)
        .map_err(CliError::from)?;

    println!("📡 Running speed test with '{}'...", config.binary);
    let publisher = Publisher::new(
        Arc::new(CommandSource::speedtest(&config)),
        SpeedtestFormat::new(&config.host_tag),
        &config.csv_path,
        Arc::new(sink),
    );
    let reading = publisher.publish().await.map_err(CliError::from)?;

    println!("  Ping:     {} ms", format_float(reading.ping_ms));
    println!("  Jitter:   {} ms", format_float(reading.jitter_ms));
    println!("  Download: {} Mbps", format_float(reading.download_mbps));
    println!("  Upload:   {} Mbps", format_float(reading.upload_mbps));
    println!("✅ Logged to '{}'", config.csv_path.display());
    Ok(())
}
