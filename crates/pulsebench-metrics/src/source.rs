//! Measurement sources: where raw readings come from.
//!
//! A source produces the raw text that a [`MetricFormat`](crate::MetricFormat)
//! parses. The speed test runs a local binary; the weather reading comes
//! from an HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::config::{SpeedtestConfig, WeatherConfig};
use crate::error::{MetricsError, MetricsResult};

/// Trait for anything that can produce one raw measurement.
#[async_trait]
pub trait MeasurementSource: Send + Sync {
    /// Human-readable name for error messages.
    fn name(&self) -> &str;

    /// Take one measurement and return its raw output.
    async fn fetch(&self) -> MetricsResult<String>;
}

/// Runs an executable and captures its stdout.
#[derive(Debug, Clone)]
pub struct CommandSource {
    program: String,
    args: Vec<String>,
}

impl CommandSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The speed-test binary with its license-accepting flags.
    pub fn speedtest(config: &SpeedtestConfig) -> Self {
        Self::new(config.binary.clone(), config.args.clone())
    }
}

#[async_trait]
impl MeasurementSource for CommandSource {
    fn name(&self) -> &str {
        &self.program
    }

    async fn fetch(&self) -> MetricsResult<String> {
        debug!(program = %self.program, args = ?self.args, "Running measurement command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .await
            .map_err(|e| MetricsError::SourceFailed {
                source_name: self.program.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MetricsError::SourceFailed {
                source_name: self.program.clone(),
                reason: format!("exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Fetches a document with an HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
    query: Vec<(String, String)>,
}

impl HttpSource {
    /// Create a source for `url` with the given query parameters.
    pub fn new(url: impl Into<String>, query: Vec<(String, String)>) -> MetricsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
            query,
        })
    }

    /// The current-weather endpoint for the configured city.
    pub fn weather(config: &WeatherConfig) -> MetricsResult<Self> {
        Self::new(
            config.base_url.clone(),
            vec![
                ("q".to_string(), config.city.clone()),
                ("appid".to_string(), config.token.clone()),
            ],
        )
    }
}

#[async_trait]
impl MeasurementSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> MetricsResult<String> {
        // The query carries the API key; only the base URL is logged.
        debug!(url = %self.url, "Fetching measurement");

        let response = self
            .client
            .get(&self.url)
            .header("Content-Type", "application/json")
            .query(&self.query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(MetricsError::SourceFailed {
                source_name: self.url.clone(),
                reason: format!("HTTP {}: {}", status.as_u16(), body.trim()),
            });
        }

        Ok(body)
    }
}
