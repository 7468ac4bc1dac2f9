//! Blocking command runner backed by `std::process`.

use std::io;
use std::process::{Command, Stdio};

use pulsebench_core::ports::{CommandError, CommandRunner, OutputMode};
use tracing::debug;

/// Runs external tools to completion on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    pub const fn new() -> Self {
        Self
    }
}

fn stdio(mode: OutputMode) -> Stdio {
    match mode {
        OutputMode::Inherit => Stdio::inherit(),
        OutputMode::Discard => Stdio::null(),
    }
}

fn spawn_error(program: &str, err: &io::Error) -> CommandError {
    let reason = if err.kind() == io::ErrorKind::NotFound {
        "executable not found".to_string()
    } else {
        err.to_string()
    };
    CommandError::Spawn {
        program: program.to_string(),
        reason,
    }
}

impl CommandRunner for ProcessCommandRunner {
    fn run(&self, program: &str, args: &[String], output: OutputMode) -> Result<(), CommandError> {
        debug!(%program, ?args, ?output, "Spawning command");

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(stdio(output))
            .stderr(stdio(output))
            .status()
            .map_err(|e| spawn_error(program, &e))?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::NonZeroExit {
                program: program.to_string(),
                code: status.code(),
            })
        }
    }
}
