//! Fetch, parse, log and write one measurement.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use crate::csv::CsvLog;
use crate::error::MetricsResult;
use crate::record::MetricRecord;
use crate::sink::MetricSink;
use crate::source::MeasurementSource;

/// How a kind of measurement is parsed and laid out.
pub trait MetricFormat: Send + Sync {
    type Reading: Send;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Parse raw source output into a typed reading.
    fn parse(&self, raw: &str) -> MetricsResult<Self::Reading>;

    /// CSV column names.
    fn csv_header(&self) -> &'static [&'static str];

    /// CSV cells for `reading` taken at local time `at`.
    fn csv_row(&self, reading: &Self::Reading, at: DateTime<Local>) -> Vec<String>;

    /// Time-series point for `reading` taken at `at`.
    fn record(&self, reading: &Self::Reading, at: DateTime<Utc>) -> MetricRecord;
}

/// One measurement pipeline: source, format, CSV log and sink.
pub struct Publisher<F: MetricFormat> {
    source: Arc<dyn MeasurementSource>,
    format: F,
    csv: CsvLog,
    sink: Arc<dyn MetricSink>,
}

impl<F: MetricFormat> Publisher<F> {
    pub fn new(
        source: Arc<dyn MeasurementSource>,
        format: F,
        csv_path: impl Into<PathBuf>,
        sink: Arc<dyn MetricSink>,
    ) -> Self {
        let csv = CsvLog::new(csv_path, format.csv_header());
        Self {
            source,
            format,
            csv,
            sink,
        }
    }

    /// Take one measurement now.
    pub async fn publish(&self) -> MetricsResult<F::Reading> {
        self.publish_at(Utc::now()).await
    }

    /// Take one measurement, stamping it with `at`.
    ///
    /// Steps run in order and the first failure stops the pipeline: a parse
    /// error leaves both the CSV log and the sink untouched, and a CSV error
    /// means nothing is written to the sink.
    pub async fn publish_at(&self, at: DateTime<Utc>) -> MetricsResult<F::Reading> {
        debug!(source = self.source.name(), measurement = self.format.name(), "Fetching");
        let raw = self.source.fetch().await?;
        let reading = self.format.parse(&raw)?;

        self.csv
            .append(&self.format.csv_row(&reading, at.with_timezone(&Local)))?;
        self.sink.write(&self.format.record(&reading, at)).await?;

        info!(
            measurement = self.format.name(),
            source = self.source.name(),
            csv = %self.csv.path().display(),
            "Measurement published"
        );
        Ok(reading)
    }
}
