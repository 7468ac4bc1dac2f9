//! Command runner port for external tool invocations.
//!
//! Both the package-manager install and every benchmark stage go through
//! this port so services can be exercised without spawning processes.

use thiserror::Error;

/// What happens to a child's stdout/stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Stream the tool's native output to the operator's terminal.
    Inherit,
    /// Drain and discard all output.
    #[default]
    Discard,
}

impl OutputMode {
    /// `Inherit` when verbose, `Discard` otherwise.
    pub const fn from_verbose(verbose: bool) -> Self {
        if verbose { Self::Inherit } else { Self::Discard }
    }
}

/// Errors from running an external command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process could not be started at all.
    #[error("Failed to start '{program}': {reason}")]
    Spawn { program: String, reason: String },

    /// The process ran and exited unsuccessfully.
    #[error("'{program}' exited with {}", describe_exit(.code))]
    NonZeroExit { program: String, code: Option<i32> },
}

#[allow(clippy::ref_option)]
fn describe_exit(code: &Option<i32>) -> String {
    code.map_or_else(
        || "no exit code (terminated by signal)".to_string(),
        |c| format!("status {c}"),
    )
}

/// Port for running a command to completion.
///
/// Implementations block until the child exits. A non-zero exit is reported
/// as [`CommandError::NonZeroExit`].
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args`, blocking until it exits.
    fn run(&self, program: &str, args: &[String], output: OutputMode) -> Result<(), CommandError>;
}
