//! Error types for metric publishing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for metric operations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors from fetching, parsing, logging or writing a measurement.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// A named field was not present in the measurement output.
    #[error("Measurement output has no '{0}' value")]
    MissingField(&'static str),

    /// A field was present but not a number.
    #[error("Field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    /// A required configuration variable is unset.
    #[error("Missing configuration: set {0}")]
    MissingConfig(&'static str),

    /// The measurement source could not produce output.
    #[error("Measurement source '{source_name}' failed: {reason}")]
    SourceFailed { source_name: String, reason: String },

    /// The time-series database refused the write.
    #[error("Sink rejected write with status {status}: {body}")]
    SinkRejected { status: u16, body: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV log could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = MetricsError::MissingField("jitter");
        assert!(err.to_string().contains("jitter"));
    }

    #[test]
    fn test_sink_rejected_message() {
        let err = MetricsError::SinkRejected {
            status: 401,
            body: "unauthorized access".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("unauthorized"));
    }
}
