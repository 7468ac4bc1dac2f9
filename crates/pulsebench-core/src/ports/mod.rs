//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `std::process` or filesystem probing in any signature
//! - Intent-based methods (run a command, wait for the operator)
//! - Every port has a trivial implementation usable in tests

pub mod benchmark_events;
pub mod command_runner;
pub mod host_probe;
pub mod stage_gate;
pub mod tool_locator;

pub use benchmark_events::{BenchmarkEvent, BenchmarkEventEmitter, NoopEmitter, SkipReason};
pub use command_runner::{CommandError, CommandRunner, OutputMode};
pub use host_probe::HostProbePort;
pub use stage_gate::{GateError, NoopGate, StageGate};
pub use tool_locator::{ToolLocator, check_required_tools};
