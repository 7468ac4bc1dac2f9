//! Core services that sequence ports into the setup and benchmark
//! pipelines.

mod benchmark_runner;
mod tool_resolver;

pub use benchmark_runner::{BenchmarkError, BenchmarkRunner, RunOptions, RunSummary};
pub use tool_resolver::{InstallPlan, ResolverError, ToolResolver};
