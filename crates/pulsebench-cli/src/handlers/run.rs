//! Run command handler.

use std::sync::Arc;

use anyhow::Result;
use pulsebench_core::{BenchmarkRunner, NoopGate, OutputMode, RunOptions, StageGate};
use pulsebench_runtime::display_available;
use tracing::info;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::ConsoleEmitter;
use crate::utils::input::StdinGate;

/// Arguments accepted by `pulsebench run`.
#[derive(Debug, Clone, Copy)]
pub struct RunArgs {
    pub verbose: bool,
    pub loops: u32,
    pub stepped: bool,
    pub threads: Option<u32>,
}

impl RunArgs {
    fn options(&self, display_available: bool) -> RunOptions {
        RunOptions {
            loops: self.loops,
            threads: self.threads,
            output: OutputMode::from_verbose(self.verbose),
            display_available,
        }
    }
}

/// Load the saved profile and run the benchmark suite.
pub fn execute(ctx: &CliContext, args: &RunArgs) -> Result<()> {
    let profile = ctx.store.load().map_err(CliError::from)?;

    let gate: Arc<dyn StageGate> = if args.stepped {
        Arc::new(StdinGate::new())
    } else {
        Arc::new(NoopGate)
    };

    let runner = BenchmarkRunner::new(
        Arc::clone(&ctx.locator),
        Arc::clone(&ctx.runner),
        gate,
        Arc::new(ConsoleEmitter),
    );

    let summary = runner
        .run(&profile, &args.options(display_available()))
        .map_err(CliError::from)?;

    info!(
        iterations = summary.iterations,
        completed = summary.stages_completed,
        skipped = summary.stages_skipped,
        "Benchmark run finished"
    );
    Ok(())
}
