//! Metric publishers for PulseBench.
//!
//! Each publisher takes one external measurement (an internet speed test or
//! the current weather), parses the values it cares about, appends a row to
//! a local CSV log and writes one point to an InfluxDB v2 bucket.
//!
//! ```ignore
//! use std::sync::Arc;
//! use pulsebench_metrics::{HttpSource, InfluxSink, Publisher, SinkConfig, WeatherConfig, WeatherFormat};
//!
//! let weather = WeatherConfig::from_env()?;
//! let sink = Arc::new(InfluxSink::new(SinkConfig::from_env()?)?);
//! let publisher = Publisher::new(
//!     Arc::new(HttpSource::weather(&weather)?),
//!     WeatherFormat::new(&weather.city),
//!     &weather.csv_path,
//!     sink,
//! );
//! publisher.publish().await?;
//! ```

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod config;
mod csv;
mod error;
mod publisher;
mod record;
mod sink;
mod source;
mod speedtest;
mod weather;

// ============================================================================
// Public API
// ============================================================================

// Configuration
pub use config::{
    DEFAULT_OWM_URL, ENV_INFLUX_BUCKET, ENV_INFLUX_ORG, ENV_INFLUX_TOKEN, ENV_INFLUX_URL,
    ENV_OWM_TOKEN, ENV_OWM_URL, ENV_SPEEDTEST_BIN, ENV_SPEEDTEST_CSV, ENV_SPEEDTEST_HOST,
    ENV_WEATHER_CITY, ENV_WEATHER_CSV, SinkConfig, SpeedtestConfig, WeatherConfig, process_env,
};

// Errors
pub use error::{MetricsError, MetricsResult};

// Pipeline
pub use csv::CsvLog;
pub use publisher::{MetricFormat, Publisher};
pub use record::{MetricRecord, format_float};
pub use sink::{InfluxSink, MetricSink};
pub use source::{CommandSource, HttpSource, MeasurementSource};

// Measurements
pub use speedtest::{
    SPEEDTEST_CSV_HEADER, SPEEDTEST_MEASUREMENT, SpeedtestFormat, SpeedtestReading,
    parse_speedtest,
};
pub use weather::{
    WEATHER_CSV_HEADER, WEATHER_MEASUREMENT, WeatherFormat, WeatherReading, kelvin_to_celsius,
    ms_to_kmh, parse_weather,
};
