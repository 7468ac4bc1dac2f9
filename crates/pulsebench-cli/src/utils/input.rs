//! User input utilities for interactive command-line prompts.

use std::io::{self, BufRead, BufReader, Stdin, Write};
use std::sync::Mutex;

use pulsebench_core::{BenchmarkStage, GateError, StageGate};

/// Prompt shown before each stage in stepped mode.
pub const CONTINUE_PROMPT: &str = "⏸️  Press Enter to continue...";

/// Prints `prompt` and waits for a line on `input`.
///
/// Returns an error when the input is closed, so a stepped run cannot spin
/// through its stages unattended.
pub fn wait_for_enter<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output)?;
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(())
}

/// Stage gate that blocks on the terminal until the operator presses Enter.
pub struct StdinGate<R = BufReader<Stdin>> {
    input: Mutex<R>,
}

impl StdinGate {
    pub fn new() -> Self {
        Self::with_input(BufReader::new(io::stdin()))
    }
}

impl Default for StdinGate {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead + Send> StdinGate<R> {
    /// Gate reading from an arbitrary line source.
    pub const fn with_input(input: R) -> Self {
        Self {
            input: Mutex::new(input),
        }
    }
}

impl<R: BufRead + Send> StageGate for StdinGate<R> {
    fn wait(&self, next: BenchmarkStage) -> Result<(), GateError> {
        let gate_err = |reason: String| GateError {
            stage: next,
            reason,
        };
        let mut input = self
            .input
            .lock()
            .map_err(|_| gate_err("input lock poisoned".to_string()))?;
        wait_for_enter(&mut *input, &mut io::stdout(), CONTINUE_PROMPT)
            .map_err(|e| gate_err(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_wait_for_enter_prints_prompt() {
        let mut input = Cursor::new("\n");
        let mut output = Vec::new();
        wait_for_enter(&mut input, &mut output, CONTINUE_PROMPT).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), format!("\n{CONTINUE_PROMPT}"));
    }

    #[test]
    fn test_gate_consumes_one_line_per_stage() {
        let gate = StdinGate::with_input(Cursor::new("\n\n"));
        assert!(gate.wait(BenchmarkStage::Cpu).is_ok());
        assert!(gate.wait(BenchmarkStage::Memory).is_ok());

        let err = gate.wait(BenchmarkStage::Disk).unwrap_err();
        assert_eq!(err.stage, BenchmarkStage::Disk);
        assert!(err.reason.contains("closed"));
    }
}
