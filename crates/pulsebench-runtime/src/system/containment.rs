//! Container and WSL detection.

use std::fs;
use std::path::Path;

/// cgroup membership of PID 1.
pub const INIT_CGROUP_PATH: &str = "/proc/1/cgroup";

/// `true` when any cgroup line mentions a container.
pub fn cgroup_indicates_container(content: &str) -> bool {
    content.lines().any(|line| line.contains("container"))
}

/// Read the cgroup file at `path`. Unreadable means not a container.
pub fn detect_container_from(path: &Path) -> bool {
    fs::read_to_string(path).is_ok_and(|content| cgroup_indicates_container(&content))
}

/// `true` for WSL kernel releases.
///
/// WSL2 kernels carry `WSL` in the release string; WSL1 only reports
/// `Microsoft`.
pub fn is_wsl_kernel(release: &str) -> bool {
    release.contains("WSL") || release.to_lowercase().contains("microsoft")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cgroup_container_marker() {
        assert!(cgroup_indicates_container(
            "0::/system.slice/containerd.service\n"
        ));
        assert!(cgroup_indicates_container(
            "12:cpuset:/docker/abc\n11:memory:/container/abc\n"
        ));
        assert!(!cgroup_indicates_container("0::/init.scope\n"));
        assert!(!cgroup_indicates_container(""));
    }

    #[test]
    fn test_unreadable_cgroup_is_not_container() {
        let dir = tempdir().unwrap();
        assert!(!detect_container_from(&dir.path().join("cgroup")));
    }

    #[test]
    fn test_cgroup_file_is_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cgroup");
        fs::write(&path, "0::/container/runtime\n").unwrap();
        assert!(detect_container_from(&path));
    }

    #[test]
    fn test_wsl_kernels() {
        assert!(is_wsl_kernel("5.15.153.1-microsoft-standard-WSL2"));
        assert!(is_wsl_kernel("4.4.0-19041-Microsoft"));
        assert!(!is_wsl_kernel("6.8.0-45-generic"));
        assert!(!is_wsl_kernel("Unknown"));
    }
}
