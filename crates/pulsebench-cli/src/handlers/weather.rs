//! Weather command handler.

use std::sync::Arc;

use anyhow::Result;
use pulsebench_metrics::{
    HttpSource, InfluxSink, Publisher, SinkConfig, WeatherConfig, WeatherFormat, format_float,
};

use crate::error::CliError;

/// Fetch the current weather for the configured city and publish it.
pub async fn execute() -> Result<()> {
    let config = WeatherConfig::from_env().map_err(CliError::from)?;
    let sink = InfluxSink::new(SinkConfig::from_env().map_err(CliError::from)?)
        .map_err(CliError::from)?;

    println!("🌦️  Fetching weather for {}...", config.city);
    let publisher = Publisher::new(
        Arc::new(HttpSource::weather(&config).map_err(CliError::from)?),
        WeatherFormat::new(&config.city),
        &config.csv_path,
        Arc::new(sink),
    );
    let reading = publisher.publish().await.map_err(CliError::from)?;

    println!("  Temperature: {} °C", format_float(reading.temp_celsius));
    println!("  Rain:        {} mm", format_float(reading.rain_mm));
    println!("  Wind:        {} km/h", format_float(reading.windspeed_kmh));
    println!("  Gusts:       {} km/h", format_float(reading.gust_kmh));
    println!("  Snow:        {} mm", format_float(reading.snow_mm));
    println!("✅ Logged to '{}'", config.csv_path.display());
    Ok(())
}
