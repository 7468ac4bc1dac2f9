//! Publisher configuration.
//!
//! Every setting comes from the process environment (optionally seeded from
//! a `.env` file by the binary). Nothing sensitive has a default. Each
//! config also has builder-style setters so callers and tests can construct
//! one directly.
//!
//! # Example
//!
//! ```
//! use pulsebench_metrics::WeatherConfig;
//!
//! let config = WeatherConfig::new("owm-token")
//!     .with_city("Hamburg")
//!     .with_csv_path("/tmp/weather.csv");
//! ```

use std::path::PathBuf;

use crate::error::{MetricsError, MetricsResult};

pub const ENV_INFLUX_URL: &str = "PULSEBENCH_INFLUX_URL";
pub const ENV_INFLUX_ORG: &str = "PULSEBENCH_INFLUX_ORG";
pub const ENV_INFLUX_TOKEN: &str = "PULSEBENCH_INFLUX_TOKEN";
pub const ENV_INFLUX_BUCKET: &str = "PULSEBENCH_INFLUX_BUCKET";

pub const ENV_SPEEDTEST_BIN: &str = "PULSEBENCH_SPEEDTEST_BIN";
pub const ENV_SPEEDTEST_HOST: &str = "PULSEBENCH_SPEEDTEST_HOST";
pub const ENV_SPEEDTEST_CSV: &str = "PULSEBENCH_SPEEDTEST_CSV";

pub const ENV_OWM_TOKEN: &str = "PULSEBENCH_OWM_TOKEN";
pub const ENV_OWM_URL: &str = "PULSEBENCH_OWM_URL";
pub const ENV_WEATHER_CITY: &str = "PULSEBENCH_WEATHER_CITY";
pub const ENV_WEATHER_CSV: &str = "PULSEBENCH_WEATHER_CSV";

/// Default OpenWeatherMap current-weather endpoint.
pub const DEFAULT_OWM_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Read a variable from the real process environment. Empty counts as unset.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> MetricsResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).ok_or(MetricsError::MissingConfig(key))
}

/// Connection parameters for the time-series database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Base URL, e.g. `http://influx.local:8086`.
    pub endpoint: String,
    pub organization: String,
    pub token: String,
    pub bucket: String,
}

impl SinkConfig {
    pub fn new(
        endpoint: impl Into<String>,
        organization: impl Into<String>,
        token: impl Into<String>,
        bucket: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            organization: organization.into(),
            token: token.into(),
            bucket: bucket.into(),
        }
    }

    /// Build from the process environment.
    pub fn from_env() -> MetricsResult<Self> {
        Self::from_lookup(process_env)
    }

    /// Build from an arbitrary variable lookup. Every variable is required.
    pub fn from_lookup<F>(lookup: F) -> MetricsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            endpoint: required(&lookup, ENV_INFLUX_URL)?,
            organization: required(&lookup, ENV_INFLUX_ORG)?,
            token: required(&lookup, ENV_INFLUX_TOKEN)?,
            bucket: required(&lookup, ENV_INFLUX_BUCKET)?,
        })
    }

    /// Full URL of the v2 write endpoint, without query parameters.
    pub fn write_url(&self) -> String {
        format!("{}/api/v2/write", self.endpoint.trim_end_matches('/'))
    }
}

/// Speed-test publisher settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedtestConfig {
    /// Speed-test executable.
    pub binary: String,
    /// Arguments accepting the license prompts non-interactively.
    pub args: Vec<String>,
    /// Value of the `host` tag on written points.
    pub host_tag: String,
    pub csv_path: PathBuf,
}

impl Default for SpeedtestConfig {
    fn default() -> Self {
        Self {
            binary: "speedtest".to_string(),
            args: vec![
                "--accept-license".to_string(),
                "--accept-gdpr".to_string(),
            ],
            host_tag: "localhost".to_string(),
            csv_path: PathBuf::from("speedtest.csv"),
        }
    }
}

impl SpeedtestConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    /// Defaults overridden by whichever variables `lookup` provides.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(binary) = lookup(ENV_SPEEDTEST_BIN) {
            config = config.with_binary(binary);
        }
        if let Some(host) = lookup(ENV_SPEEDTEST_HOST) {
            config = config.with_host_tag(host);
        }
        if let Some(path) = lookup(ENV_SPEEDTEST_CSV) {
            config = config.with_csv_path(path);
        }
        config
    }

    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    #[must_use]
    pub fn with_host_tag(mut self, host: impl Into<String>) -> Self {
        self.host_tag = host.into();
        self
    }

    #[must_use]
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }
}

/// Weather publisher settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherConfig {
    /// Current-weather endpoint.
    pub base_url: String,
    /// OpenWeatherMap API key.
    pub token: String,
    /// City name, also used as the `location` tag.
    pub city: String,
    pub csv_path: PathBuf,
}

impl WeatherConfig {
    /// Defaults for everything except the API key.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_OWM_URL.to_string(),
            token: token.into(),
            city: "Berlin".to_string(),
            csv_path: PathBuf::from("weatherdata.csv"),
        }
    }

    pub fn from_env() -> MetricsResult<Self> {
        Self::from_lookup(process_env)
    }

    /// The API key is required; everything else falls back to defaults.
    pub fn from_lookup<F>(lookup: F) -> MetricsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(required(&lookup, ENV_OWM_TOKEN)?);
        if let Some(url) = lookup(ENV_OWM_URL) {
            config = config.with_base_url(url);
        }
        if let Some(city) = lookup(ENV_WEATHER_CITY) {
            config = config.with_city(city);
        }
        if let Some(path) = lookup(ENV_WEATHER_CSV) {
            config = config.with_csv_path(path);
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    #[must_use]
    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }
}
