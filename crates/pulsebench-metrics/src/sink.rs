//! Time-series sink.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::SinkConfig;
use crate::error::{MetricsError, MetricsResult};
use crate::record::MetricRecord;

/// Destination for measurement points.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Write one point. No retries.
    async fn write(&self, record: &MetricRecord) -> MetricsResult<()>;
}

/// InfluxDB v2 write API over HTTP.
#[derive(Debug, Clone)]
pub struct InfluxSink {
    client: reqwest::Client,
    config: SinkConfig,
}

impl InfluxSink {
    pub fn new(config: SinkConfig) -> MetricsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl MetricSink for InfluxSink {
    async fn write(&self, record: &MetricRecord) -> MetricsResult<()> {
        let line = record.to_line_protocol();
        debug!(%line, bucket = %self.config.bucket, "Writing point");

        let response = self
            .client
            .post(self.config.write_url())
            .query(&[
                ("org", self.config.organization.as_str()),
                ("bucket", self.config.bucket.as_str()),
                ("precision", "ns"),
            ])
            .header("Authorization", format!("Token {}", self.config.token))
            .header("Content-Type", "text/plain; charset=utf-8")
            .body(line)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MetricsError::SinkRejected {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        info!(measurement = %record.measurement, "Point written");
        Ok(())
    }
}
