//! Host profile domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used when a textual host attribute cannot be determined.
pub const UNKNOWN: &str = "Unknown";

/// Detected description of the machine running the benchmarks.
///
/// Created once by the host probe during setup, persisted by the
/// [`ProfileStore`](crate::ProfileStore) and treated as read-only by every
/// benchmark run afterwards. Field names match the on-disk document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostProfile {
    /// Platform identifier (os-release `ID`, or the OS family name).
    pub distro: String,
    /// Running kernel release.
    pub kernel: String,
    /// CPU architecture (e.g. `x86_64`, `aarch64`).
    pub arch: String,
    /// CPU model / brand string.
    pub cpu: String,
    /// Logical CPU count. Always at least 1.
    pub cpu_threads: u32,
    /// Total memory in GiB, rounded to two decimals.
    pub ram_gb: f64,
    /// Running inside a WSL kernel.
    pub is_wsl: bool,
    /// Running inside a container.
    pub is_container: bool,
    /// When the profile was collected (UTC).
    pub collected_at: DateTime<Utc>,
}

impl HostProfile {
    /// Whether the profile satisfies its invariants.
    pub const fn is_valid(&self) -> bool {
        self.cpu_threads >= 1
    }
}

/// Convert a byte count to GiB rounded to two decimals.
#[allow(clippy::cast_precision_loss)]
pub fn bytes_to_gib(bytes: u64) -> f64 {
    let gib = bytes as f64 / (1024.0 * 1024.0 * 1024.0);
    (gib * 100.0).round() / 100.0
}
