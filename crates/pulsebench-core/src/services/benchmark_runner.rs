//! Benchmark suite execution.
//!
//! Runs the CPU, memory, disk and GPU stages in order, `loops` times.
//! Required stages abort the whole run when their tool is missing or fails;
//! the GPU stage is best effort and never aborts.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::domain::{
    BenchmarkInvocation, BenchmarkStage, HostProfile, ToolRequirement, benchmark_suite,
};
use crate::ports::{
    BenchmarkEvent, BenchmarkEventEmitter, CommandError, CommandRunner, GateError, OutputMode,
    SkipReason, StageGate, ToolLocator,
};

/// Errors that abort a benchmark run.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// A required tool is not installed.
    #[error("{tool} not found (needed for the {stage} benchmark). Run `pulsebench setup` or install it manually.")]
    ToolMissing { stage: BenchmarkStage, tool: String },

    /// A required tool exited unsuccessfully.
    #[error("{stage} benchmark failed: {source}")]
    StageFailed {
        stage: BenchmarkStage,
        #[source]
        source: CommandError,
    },

    /// The stepped-mode gate could not get confirmation.
    #[error(transparent)]
    Gate(#[from] GateError),
}

/// Caller-controlled run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// How many times to repeat the whole suite. Values below 1 run once.
    pub loops: u32,
    /// CPU stage thread count; `None` uses the profile's logical CPU count.
    pub threads: Option<u32>,
    /// Stream or discard tool output.
    pub output: OutputMode,
    /// Whether a graphical display is available for the GPU stage.
    pub display_available: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            loops: 1,
            threads: None,
            output: OutputMode::Discard,
            display_available: false,
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Completed iterations of the suite.
    pub iterations: u32,
    /// Stage invocations that returned successfully.
    pub stages_completed: u32,
    /// Best-effort stages that were skipped or whose failure was absorbed.
    pub stages_skipped: u32,
}

enum StageOutcome {
    Completed,
    Skipped,
}

/// Executes the benchmark suite against a stored host profile.
pub struct BenchmarkRunner {
    locator: Arc<dyn ToolLocator>,
    runner: Arc<dyn CommandRunner>,
    gate: Arc<dyn StageGate>,
    events: Arc<dyn BenchmarkEventEmitter>,
}

impl BenchmarkRunner {
    pub fn new(
        locator: Arc<dyn ToolLocator>,
        runner: Arc<dyn CommandRunner>,
        gate: Arc<dyn StageGate>,
        events: Arc<dyn BenchmarkEventEmitter>,
    ) -> Self {
        Self {
            locator,
            runner,
            gate,
            events,
        }
    }

    /// Run the suite `options.loops` times.
    ///
    /// Stops at the first required-stage failure; nothing after it runs.
    pub fn run(
        &self,
        profile: &HostProfile,
        options: &RunOptions,
    ) -> Result<RunSummary, BenchmarkError> {
        let total = options.loops.max(1);
        let threads = options.threads.unwrap_or(profile.cpu_threads).max(1);
        let mut summary = RunSummary::default();

        for iteration in 1..=total {
            self.events.emit(BenchmarkEvent::RunStarted {
                iteration,
                total,
                distro: profile.distro.clone(),
                threads,
                at: Utc::now(),
            });

            for invocation in benchmark_suite(threads) {
                self.gate.wait(invocation.stage)?;
                match self.run_stage(&invocation, options)? {
                    StageOutcome::Completed => summary.stages_completed += 1,
                    StageOutcome::Skipped => summary.stages_skipped += 1,
                }
            }

            self.events
                .emit(BenchmarkEvent::RunCompleted { iteration, total });
            summary.iterations += 1;
        }

        Ok(summary)
    }

    fn run_stage(
        &self,
        invocation: &BenchmarkInvocation,
        options: &RunOptions,
    ) -> Result<StageOutcome, BenchmarkError> {
        let stage = invocation.stage;

        if !self.locator.is_available(&invocation.program) {
            return match invocation.requirement {
                ToolRequirement::Required => Err(BenchmarkError::ToolMissing {
                    stage,
                    tool: invocation.program.clone(),
                }),
                ToolRequirement::Optional => {
                    self.skip(
                        stage,
                        SkipReason::ToolMissing {
                            tool: invocation.program.clone(),
                        },
                    );
                    Ok(StageOutcome::Skipped)
                }
            };
        }

        if stage == BenchmarkStage::Gpu && !options.display_available {
            self.skip(stage, SkipReason::NoDisplay);
            return Ok(StageOutcome::Skipped);
        }

        self.events.emit(BenchmarkEvent::StageStarted { stage });
        debug!(command = %invocation.command_line(), "Running benchmark stage");

        match self
            .runner
            .run(&invocation.program, &invocation.args, options.output)
        {
            Ok(()) => {
                self.events.emit(BenchmarkEvent::StageFinished { stage });
                Ok(StageOutcome::Completed)
            }
            Err(source) => match invocation.requirement {
                ToolRequirement::Required => Err(BenchmarkError::StageFailed { stage, source }),
                ToolRequirement::Optional => {
                    debug!(%stage, error = %source, "Best-effort stage failed");
                    self.events.emit(BenchmarkEvent::StageFailureAbsorbed {
                        stage,
                        error: source.to_string(),
                    });
                    Ok(StageOutcome::Skipped)
                }
            },
        }
    }

    /// Reported through the emitter only; logging stays below `warn`.
    fn skip(&self, stage: BenchmarkStage, reason: SkipReason) {
        debug!(%stage, ?reason, "Skipping stage");
        self.events
            .emit(BenchmarkEvent::StageSkipped { stage, reason });
    }
}
