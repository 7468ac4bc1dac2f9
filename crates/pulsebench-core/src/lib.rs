//! Core domain, ports and services for PulseBench.
//!
//! This crate holds everything that does not touch the host directly:
//! the [`HostProfile`] document and its store, the platform package table,
//! the benchmark suite definition, and the services that resolve tools and
//! drive benchmark runs. Process spawning, `PATH` lookups and host probing
//! are reached through the traits in [`ports`] and implemented elsewhere.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod profile_store;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{
    BenchmarkInvocation, BenchmarkStage, HostProfile, PackageManagerSpec, REQUIRED_TOOLS,
    SUPPORTED_PLATFORMS, ToolRequirement, UNKNOWN, benchmark_suite, bytes_to_gib,
    package_manager_for,
};
pub use ports::{
    BenchmarkEvent, BenchmarkEventEmitter, CommandError, CommandRunner, GateError,
    HostProbePort, NoopEmitter, NoopGate, OutputMode, SkipReason, StageGate, ToolLocator,
    check_required_tools,
};
pub use profile_store::{DEFAULT_PROFILE_FILE, ProfileError, ProfileStore};
pub use services::{
    BenchmarkError, BenchmarkRunner, InstallPlan, ResolverError, RunOptions, RunSummary,
    ToolResolver,
};
