//! Speed-test output parsing.
//!
//! The speed-test CLI prints a human-readable report. The values are taken
//! from these labelled lines:
//!
//! ```text
//!    Idle Latency:    10.54 ms   (jitter: 0.41ms, low: 10.21ms, high: 11.03ms)
//!        Download:   312.45 Mbps (data used: 400.2 MB)
//!          Upload:    40.12 Mbps (data used: 52.6 MB)
//! ```
//!
//! Ping is the first value after the first `Latency:` label and jitter is
//! the `jitter:` value on that same line. Later latency lines (loaded
//! latency during download/upload) are ignored.

use std::sync::LazyLock;

use chrono::{DateTime, Local, Utc};
use regex::Regex;

use crate::error::{MetricsError, MetricsResult};
use crate::publisher::MetricFormat;
use crate::record::{MetricRecord, format_float};

static LATENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Latency:\s+(?P<ping>\S+)").expect("latency regex should compile"));
static JITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"jitter:\s*(?P<jitter>.*?)\s*ms").expect("jitter regex should compile"));
static DOWNLOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Download:\s+(?P<download>\S+)").expect("download regex should compile"));
static UPLOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Upload:\s+(?P<upload>\S+)").expect("upload regex should compile"));

/// CSV columns of the speed-test log.
pub const SPEEDTEST_CSV_HEADER: &[&str] = &[
    "Date",
    "Time",
    "Ping (ms)",
    "Jitter (ms)",
    "Download (Mbps)",
    "Upload (Mbps)",
];

/// Measurement name of written points.
pub const SPEEDTEST_MEASUREMENT: &str = "internet_speed";

/// One speed-test result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedtestReading {
    pub ping_ms: f64,
    pub jitter_ms: f64,
    pub download_mbps: f64,
    pub upload_mbps: f64,
}

fn number(field: &'static str, raw: &str) -> MetricsResult<f64> {
    raw.trim().parse().map_err(|_| MetricsError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn capture<'a>(re: &Regex, text: &'a str, field: &'static str) -> MetricsResult<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.name(field))
        .map(|m| m.as_str())
        .ok_or(MetricsError::MissingField(field))
}

/// Parse the speed-test report.
///
/// Any absent label yields [`MetricsError::MissingField`]; a label followed
/// by something that is not a number yields [`MetricsError::InvalidNumber`].
pub fn parse_speedtest(output: &str) -> MetricsResult<SpeedtestReading> {
    let latency_line = output
        .lines()
        .find(|line| line.contains("Latency:"))
        .ok_or(MetricsError::MissingField("ping"))?;

    let ping = capture(&LATENCY, latency_line, "ping")?;
    let jitter = capture(&JITTER, latency_line, "jitter")?;
    let download = capture(&DOWNLOAD, output, "download")?;
    let upload = capture(&UPLOAD, output, "upload")?;

    Ok(SpeedtestReading {
        ping_ms: number("ping", ping)?,
        jitter_ms: number("jitter", jitter)?,
        download_mbps: number("download", download)?,
        upload_mbps: number("upload", upload)?,
    })
}

/// CSV and point layout for speed-test readings.
#[derive(Debug, Clone)]
pub struct SpeedtestFormat {
    host: String,
}

impl SpeedtestFormat {
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }
}

impl MetricFormat for SpeedtestFormat {
    type Reading = SpeedtestReading;

    fn name(&self) -> &'static str {
        "speedtest"
    }

    fn parse(&self, raw: &str) -> MetricsResult<SpeedtestReading> {
        parse_speedtest(raw)
    }

    fn csv_header(&self) -> &'static [&'static str] {
        SPEEDTEST_CSV_HEADER
    }

    fn csv_row(&self, reading: &SpeedtestReading, at: DateTime<Local>) -> Vec<String> {
        vec![
            at.format("%m/%d/%y").to_string(),
            at.format("%H:%M").to_string(),
            format_float(reading.ping_ms),
            format_float(reading.jitter_ms),
            format_float(reading.download_mbps),
            format_float(reading.upload_mbps),
        ]
    }

    /// The server assigns the timestamp.
    fn record(&self, reading: &SpeedtestReading, _at: DateTime<Utc>) -> MetricRecord {
        MetricRecord::new(SPEEDTEST_MEASUREMENT)
            .with_tag("host", &self.host)
            .with_field("download", reading.download_mbps)
            .with_field("upload", reading.upload_mbps)
            .with_field("ping", reading.ping_ms)
            .with_field("jitter", reading.jitter_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const REPORT: &str = "
   Speedtest by Ookla

      Server: Example ISP - Berlin (id: 12345)
         ISP: Example Telecom
Idle Latency:    10.54 ms   (jitter: 0.41ms, low: 10.21ms, high: 11.03ms)
    Download:   312.45 Mbps (data used: 400.2 MB)
                 15.20 ms   (jitter: 2.10ms, low: 11.00ms, high: 40.00ms)
      Upload:    40.12 Mbps (data used: 52.6 MB)
                 22.80 ms   (jitter: 5.00ms, low: 12.00ms, high: 90.00ms)
 Packet Loss:     0.0%
";

    #[test]
    fn test_parse_full_report() {
        let reading = parse_speedtest(REPORT).unwrap();
        assert_eq!(
            reading,
            SpeedtestReading {
                ping_ms: 10.54,
                jitter_ms: 0.41,
                download_mbps: 312.45,
                upload_mbps: 40.12,
            }
        );
    }

    #[test]
    fn test_older_latency_label() {
        let report = "Latency: 8.1 ms (jitter: 1.2 ms)\nDownload: 90 Mbps\nUpload: 20 Mbps\n";
        let reading = parse_speedtest(report).unwrap();
        assert!((reading.ping_ms - 8.1).abs() < f64::EPSILON);
        assert!((reading.jitter_ms - 1.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_jitter_on_first_latency_line() {
        let report = "Idle Latency: 10.5 ms\n 12 ms (jitter: 3.0ms)\nDownload: 1 Mbps\nUpload: 1 Mbps\n";
        assert!(matches!(
            parse_speedtest(report),
            Err(MetricsError::MissingField("jitter"))
        ));
    }

    #[test]
    fn test_missing_sections() {
        assert!(matches!(
            parse_speedtest("no output"),
            Err(MetricsError::MissingField("ping"))
        ));

        let no_upload = REPORT.replace("Upload:", "Uplink:");
        assert!(matches!(
            parse_speedtest(&no_upload),
            Err(MetricsError::MissingField("upload"))
        ));
    }

    #[test]
    fn test_non_numeric_value() {
        let report = REPORT.replace("312.45 Mbps", "n/a Mbps");
        match parse_speedtest(&report) {
            Err(MetricsError::InvalidNumber { field, value }) => {
                assert_eq!(field, "download");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_csv_row_and_record() {
        let format = SpeedtestFormat::new("raspberrypi");
        let reading = parse_speedtest(REPORT).unwrap();
        let at = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();

        assert_eq!(
            format.csv_row(&reading, at),
            vec!["03/07/24", "09:05", "10.54", "0.41", "312.45", "40.12"]
        );

        let record = format.record(&reading, at.with_timezone(&Utc));
        assert_eq!(record.timestamp, None);
        assert_eq!(
            record.to_line_protocol(),
            "internet_speed,host=raspberrypi download=312.45,jitter=0.41,ping=10.54,upload=40.12"
        );
    }
}
