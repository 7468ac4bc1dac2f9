//! Host probe implementation for pulsebench-runtime.
//!
//! This module provides the `DefaultHostProbe` which implements
//! `HostProbePort` from pulsebench-core. It reads os-release and cgroup
//! files and queries hardware counters through sysinfo.

mod containment;
mod platform;

use std::path::PathBuf;

use chrono::Utc;
use pulsebench_core::domain::{HostProfile, UNKNOWN, bytes_to_gib};
use pulsebench_core::ports::HostProbePort;
use sysinfo::System;
use tracing::debug;

pub use containment::{
    INIT_CGROUP_PATH, cgroup_indicates_container, detect_container_from, is_wsl_kernel,
};
pub use platform::{OS_RELEASE_PATH, detect_platform_from, parse_os_release_id};

/// Default implementation of `HostProbePort`.
///
/// Constructed in the CLI's composition root and handed to the setup
/// handler.
///
/// # Example
///
/// ```ignore
/// use pulsebench_runtime::system::DefaultHostProbe;
/// use pulsebench_core::ports::HostProbePort;
///
/// let profile = DefaultHostProbe::new().collect_profile();
/// ```
#[derive(Debug, Clone)]
pub struct DefaultHostProbe {
    os_release: PathBuf,
    init_cgroup: PathBuf,
}

impl DefaultHostProbe {
    /// Create a probe reading the standard system files.
    pub fn new() -> Self {
        Self::with_paths(OS_RELEASE_PATH, INIT_CGROUP_PATH)
    }

    /// Create a probe reading os-release and cgroup data from custom paths.
    pub fn with_paths(os_release: impl Into<PathBuf>, init_cgroup: impl Into<PathBuf>) -> Self {
        Self {
            os_release: os_release.into(),
            init_cgroup: init_cgroup.into(),
        }
    }
}

impl Default for DefaultHostProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn or_unknown(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Machine architecture reported by the running kernel, or the build
/// target's when the host does not report one.
fn host_arch(reported: &str) -> String {
    let reported = reported.trim();
    if reported.is_empty() || reported.eq_ignore_ascii_case("unknown") {
        std::env::consts::ARCH.to_string()
    } else {
        reported.to_string()
    }
}

impl HostProbePort for DefaultHostProbe {
    fn collect_profile(&self) -> HostProfile {
        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_all();

        let kernel = or_unknown(System::kernel_version());
        let cpu = or_unknown(sys.cpus().first().map(|c| c.brand().to_string()));
        let cpu_threads = u32::try_from(num_cpus::get()).unwrap_or(u32::MAX).max(1);

        let profile = HostProfile {
            distro: detect_platform_from(&self.os_release),
            is_wsl: is_wsl_kernel(&kernel),
            kernel,
            arch: host_arch(&System::cpu_arch()),
            cpu,
            cpu_threads,
            ram_gb: bytes_to_gib(sys.total_memory()),
            is_container: detect_container_from(&self.init_cgroup),
            collected_at: Utc::now(),
        };

        debug!(?profile, "Collected host profile");
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_or_unknown() {
        assert_eq!(or_unknown(None), UNKNOWN);
        assert_eq!(or_unknown(Some("  ".to_string())), UNKNOWN);
        assert_eq!(or_unknown(Some("6.8.0".to_string())), "6.8.0");
    }

    #[test]
    fn test_host_arch_prefers_reported_machine() {
        assert_eq!(host_arch("aarch64\n"), "aarch64");
        assert_eq!(host_arch("x86_64"), "x86_64");
        assert_eq!(host_arch(""), std::env::consts::ARCH);
        assert_eq!(host_arch("unknown"), std::env::consts::ARCH);
    }

    #[test]
    fn test_profile_from_fixture_files() {
        let dir = tempdir().unwrap();
        let os_release = dir.path().join("os-release");
        let cgroup = dir.path().join("cgroup");
        fs::write(&os_release, "ID=\"Fedora\"\nVERSION_ID=40\n").unwrap();
        fs::write(&cgroup, "0::/container/abc\n").unwrap();

        let profile = DefaultHostProbe::with_paths(&os_release, &cgroup).collect_profile();

        assert_eq!(profile.distro, "fedora");
        assert!(profile.is_container);
        assert!(profile.cpu_threads >= 1);
        assert!(profile.is_valid());
        assert!(!profile.arch.is_empty());
        assert!(!profile.kernel.is_empty());
        assert!(!profile.cpu.is_empty());
    }

    #[test]
    fn test_missing_files_degrade() {
        let dir = tempdir().unwrap();
        let profile = DefaultHostProbe::with_paths(dir.path().join("a"), dir.path().join("b"))
            .collect_profile();

        assert_eq!(profile.distro, std::env::consts::OS);
        assert!(!profile.is_container);
    }
}
