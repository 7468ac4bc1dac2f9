//! Progress events emitted by the benchmark runner.
//!
//! The runner itself never prints. Adapters decide how to surface progress
//! (console output in the CLI, nothing in tests).

use chrono::{DateTime, Utc};

use crate::domain::BenchmarkStage;

/// Why a best-effort stage did not run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The stage's tool is not on `PATH`.
    ToolMissing { tool: String },
    /// No graphical display is available.
    NoDisplay,
}

/// Something observable happened during a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub enum BenchmarkEvent {
    /// A new iteration of the suite is starting.
    RunStarted {
        iteration: u32,
        total: u32,
        distro: String,
        threads: u32,
        at: DateTime<Utc>,
    },
    /// A stage's tool is about to be invoked.
    StageStarted { stage: BenchmarkStage },
    /// A stage's tool returned successfully.
    StageFinished { stage: BenchmarkStage },
    /// A best-effort stage was skipped.
    StageSkipped {
        stage: BenchmarkStage,
        reason: SkipReason,
    },
    /// A best-effort stage failed and the failure was absorbed.
    StageFailureAbsorbed {
        stage: BenchmarkStage,
        error: String,
    },
    /// Every stage of the iteration has returned.
    RunCompleted { iteration: u32, total: u32 },
}

/// Trait for emitting benchmark progress events.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and contexts that don't need progress
/// - The CLI console renderer
pub trait BenchmarkEventEmitter: Send + Sync {
    /// Emit a progress event. Must not block.
    fn emit(&self, event: BenchmarkEvent);
}

/// An emitter that discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmitter;

impl BenchmarkEventEmitter for NoopEmitter {
    fn emit(&self, _event: BenchmarkEvent) {}
}
