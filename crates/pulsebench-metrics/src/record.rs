//! Time-series points and their line-protocol encoding.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::{DateTime, Utc};

/// One point destined for the time-series database.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub measurement: String,
    pub tags: BTreeMap<String, String>,
    pub fields: BTreeMap<String, f64>,
    /// `None` lets the server assign the write time.
    pub timestamp: Option<DateTime<Utc>>,
}

impl MetricRecord {
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: BTreeMap::new(),
            fields: BTreeMap::new(),
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: f64) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    #[must_use]
    pub const fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }

    /// Encode as one line of InfluxDB line protocol (nanosecond precision).
    ///
    /// `measurement[,tag=value...] field=value[,...] [timestamp]`
    pub fn to_line_protocol(&self) -> String {
        let mut line = escape(&self.measurement);

        for (key, value) in &self.tags {
            let _ = write!(line, ",{}={}", escape(key), escape(value));
        }

        let fields = self
            .fields
            .iter()
            .map(|(key, value)| format!("{}={}", escape(key), format_float(*value)))
            .collect::<Vec<_>>()
            .join(",");
        line.push(' ');
        line.push_str(&fields);

        if let Some(nanos) = self.timestamp.and_then(|at| at.timestamp_nanos_opt()) {
            let _ = write!(line, " {nanos}");
        }

        line
    }
}

/// Backslash-escape commas, spaces and equals signs.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, ',' | ' ' | '=') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Render a float the way it reads in the CSV log and line protocol:
/// integral values keep one decimal (`0.0`, not `0`).
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_line_protocol_with_tags_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let record = MetricRecord::new("weather")
            .with_tag("location", "Berlin")
            .with_field("temp_celsius", 26.85)
            .with_field("rain_mm", 0.0)
            .with_timestamp(at);

        assert_eq!(
            record.to_line_protocol(),
            "weather,location=Berlin rain_mm=0.0,temp_celsius=26.85 1714564800000000000"
        );
    }

    #[test]
    fn test_line_protocol_without_timestamp() {
        let record = MetricRecord::new("internet_speed")
            .with_tag("host", "localhost")
            .with_field("download", 312.45)
            .with_field("upload", 40.1);

        assert_eq!(
            record.to_line_protocol(),
            "internet_speed,host=localhost download=312.45,upload=40.1"
        );
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let record = MetricRecord::new("net speed")
            .with_tag("location", "Frankfurt am Main, DE")
            .with_tag("a=b", "c")
            .with_field("ping ms", 9.5);

        assert_eq!(
            record.to_line_protocol(),
            r"net\ speed,a\=b=c,location=Frankfurt\ am\ Main\,\ DE ping\ ms=9.5"
        );
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(12.0), "12.0");
        assert_eq!(format_float(26.85), "26.85");
        assert_eq!(format_float(-3.5), "-3.5");
    }
}
