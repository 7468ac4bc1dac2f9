//! Host probe port for environment detection.
//!
//! This port abstracts active host inspection (os-release, cgroups,
//! hardware counters) from the core domain. Implementations live in
//! adapters (e.g., pulsebench-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and the `HostProfile` type (pure)
//! - Runtime owns the implementation (reads `/etc`, `/proc`, sysinfo)
//! - CLI injects the probe via main.rs

use crate::domain::HostProfile;

/// Port for collecting a [`HostProfile`].
///
/// Detection is best-effort: implementations substitute `"Unknown"`, `1`
/// or `false` for anything they cannot determine and never fail.
pub trait HostProbePort: Send + Sync {
    /// Inspect the host and build a fresh profile stamped with the current
    /// UTC time.
    fn collect_profile(&self) -> HostProfile;
}
