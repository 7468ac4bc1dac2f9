//! Operator pacing gate for stepped benchmark runs.
//!
//! The runner consults the gate before every stage. Interactive adapters
//! block until the operator confirms; automated contexts use [`NoopGate`].

use thiserror::Error;

use crate::domain::BenchmarkStage;

/// The gate could not obtain confirmation (e.g. stdin closed).
#[derive(Debug, Error)]
#[error("Stage gate failed before {stage}: {reason}")]
pub struct GateError {
    pub stage: BenchmarkStage,
    pub reason: String,
}

/// Synchronous confirmation step between benchmark stages.
pub trait StageGate: Send + Sync {
    /// Block until the operator allows `next` to start.
    fn wait(&self, next: BenchmarkStage) -> Result<(), GateError>;
}

/// A gate that never blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGate;

impl StageGate for NoopGate {
    fn wait(&self, _next: BenchmarkStage) -> Result<(), GateError> {
        Ok(())
    }
}
