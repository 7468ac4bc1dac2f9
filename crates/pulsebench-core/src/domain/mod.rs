//! Domain types for host profiling and benchmark execution.

mod benchmark;
mod platform;
mod profile;

pub use benchmark::{BenchmarkInvocation, BenchmarkStage, ToolRequirement, benchmark_suite};
pub use platform::{
    PackageManagerSpec, REQUIRED_TOOLS, SUPPORTED_PLATFORMS, package_manager_for,
};
pub use profile::{HostProfile, UNKNOWN, bytes_to_gib};
