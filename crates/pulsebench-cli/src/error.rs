//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from the library errors to exit codes and user-facing messages.

use pulsebench_core::{BenchmarkError, ProfileError, ResolverError};
use pulsebench_metrics::MetricsError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// `setup` has not been run.
    #[error("{0}")]
    NotInitialized(String),

    /// A platform, tool or remote service is not available.
    #[error("{0}")]
    Unavailable(String),

    /// Measurement output could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Process execution error.
    #[error("{0}")]
    Process(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Codes follow sysexits.h. Errors outside this type exit with 1
    /// (see [`exit_code_for`]) and clap reports bad arguments with 2.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotInitialized(_) => 66, // EX_NOINPUT
            Self::Unavailable(_) => 69,    // EX_UNAVAILABLE
            Self::Parse(_) => 70,          // EX_SOFTWARE
            Self::Process(_) => 71,        // EX_OSERR
            Self::Io(_) => 74,             // EX_IOERR
            Self::Config(_) => 78,         // EX_CONFIG
        }
    }
}

impl From<ProfileError> for CliError {
    fn from(err: ProfileError) -> Self {
        let msg = err.to_string();
        match err {
            ProfileError::NotInitialized { .. } => Self::NotInitialized(msg),
            ProfileError::Malformed { .. } | ProfileError::Invalid { .. } => Self::Config(msg),
            ProfileError::Io { .. } => Self::Io(msg),
        }
    }
}

impl From<ResolverError> for CliError {
    fn from(err: ResolverError) -> Self {
        let msg = err.to_string();
        match err {
            ResolverError::UnsupportedPlatform { .. } | ResolverError::StillMissing { .. } => {
                Self::Unavailable(msg)
            }
            ResolverError::InstallFailed { .. } => Self::Process(msg),
        }
    }
}

impl From<BenchmarkError> for CliError {
    fn from(err: BenchmarkError) -> Self {
        let msg = err.to_string();
        match err {
            BenchmarkError::ToolMissing { .. } => Self::Unavailable(msg),
            BenchmarkError::StageFailed { .. } => Self::Process(msg),
            BenchmarkError::Gate(_) => Self::Io(msg),
        }
    }
}

impl From<MetricsError> for CliError {
    fn from(err: MetricsError) -> Self {
        let msg = err.to_string();
        match err {
            MetricsError::MissingField(_)
            | MetricsError::InvalidNumber { .. }
            | MetricsError::Json(_) => Self::Parse(msg),
            MetricsError::MissingConfig(_) => Self::Config(msg),
            MetricsError::SourceFailed { .. } => Self::Process(msg),
            MetricsError::SinkRejected { .. } | MetricsError::Http(_) => Self::Unavailable(msg),
            MetricsError::Io { .. } => Self::Io(msg),
        }
    }
}

/// Exit code for an error returned from a handler.
///
/// Errors that are not a [`CliError`] anywhere in their chain are general
/// failures.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsebench_core::{BenchmarkStage, CommandError};
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::NotInitialized("x".into()).exit_code(), 66);
        assert_eq!(CliError::Unavailable("x".into()).exit_code(), 69);
        assert_eq!(CliError::Parse("x".into()).exit_code(), 70);
        assert_eq!(CliError::Process("x".into()).exit_code(), 71);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
    }

    #[test]
    fn test_profile_not_initialized() {
        let err: CliError = ProfileError::NotInitialized {
            path: PathBuf::from("pulsebench_env.json"),
        }
        .into();
        assert_eq!(err.exit_code(), 66);
        assert!(err.to_string().contains("pulsebench setup"));
    }

    #[test]
    fn test_benchmark_errors() {
        let missing: CliError = BenchmarkError::ToolMissing {
            stage: BenchmarkStage::Disk,
            tool: "fio".to_string(),
        }
        .into();
        assert_eq!(missing.exit_code(), 69);

        let failed: CliError = BenchmarkError::StageFailed {
            stage: BenchmarkStage::Cpu,
            source: CommandError::NonZeroExit {
                program: "sysbench".to_string(),
                code: Some(1),
            },
        }
        .into();
        assert_eq!(failed.exit_code(), 71);
    }

    #[test]
    fn test_metrics_errors() {
        let parse: CliError = MetricsError::MissingField("jitter").into();
        assert_eq!(parse.exit_code(), 70);

        let config: CliError = MetricsError::MissingConfig("PULSEBENCH_INFLUX_URL").into();
        assert_eq!(config.exit_code(), 78);
        assert!(config.to_string().contains("PULSEBENCH_INFLUX_URL"));
    }

    #[test]
    fn test_exit_code_through_anyhow_context() {
        let err = anyhow::Error::new(CliError::Unavailable("gone".into())).context("while running");
        assert_eq!(exit_code_for(&err), 69);
        assert_eq!(exit_code_for(&anyhow::anyhow!("plain")), 1);
    }
}
