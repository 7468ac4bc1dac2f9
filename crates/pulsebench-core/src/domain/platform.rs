//! Static platform to package-manager lookup table.
//!
//! Each supported platform identifier (the os-release `ID`) maps to the
//! package manager invocation used to install the benchmark tools and the
//! package names that provide them on that platform.

/// Tools that must be on `PATH` before benchmarks can run.
pub const REQUIRED_TOOLS: [&str; 4] = ["sysbench", "fio", "cyclictest", "glmark2"];

/// Package manager invocation and package list for one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageManagerSpec {
    /// Verb and flags placed before the package names (e.g. `apt install -y`).
    pub invocation_prefix: &'static [&'static str],
    /// Packages that provide [`REQUIRED_TOOLS`] on this platform.
    pub packages: &'static [&'static str],
}

const PACMAN: &[&str] = &["pacman", "-S", "--noconfirm"];
const APT: &[&str] = &["apt", "install", "-y"];
const DNF: &[&str] = &["dnf", "install", "-y"];
const YUM: &[&str] = &["yum", "install", "-y"];
const ZYPPER: &[&str] = &["zypper", "install", "-y"];
const EMERGE: &[&str] = &["emerge", "--ask=n"];

const COMMON_PACKAGES: &[&str] = &["sysbench", "fio", "rt-tests", "glmark2"];
const EPEL_PACKAGES: &[&str] = &["epel-release", "sysbench", "fio", "rt-tests", "glmark2"];
const GENTOO_PACKAGES: &[&str] = &[
    "app-benchmarks/sysbench",
    "app-benchmarks/fio",
    "sys-process/rt-tests",
    "x11-misc/glmark2",
];

/// Platform identifiers with a known package manager.
pub const SUPPORTED_PLATFORMS: [&str; 12] = [
    "arch",
    "manjaro",
    "ubuntu",
    "debian",
    "fedora",
    "rhel",
    "centos",
    "almalinux",
    "opensuse",
    "gentoo",
    "steamos",
    "chromeos",
];

/// Collapse os-release ID variants onto a table key.
///
/// openSUSE ships `opensuse-leap`, `opensuse-tumbleweed` and friends.
fn normalize(platform: &str) -> String {
    let lower = platform.trim().to_lowercase();
    if lower.starts_with("opensuse") {
        "opensuse".to_string()
    } else {
        lower
    }
}

/// Look up the package manager spec for a platform identifier.
///
/// Returns `None` for platforms without a known package manager; there is
/// no generic fallback across package managers.
pub fn package_manager_for(platform: &str) -> Option<PackageManagerSpec> {
    let (invocation_prefix, packages) = match normalize(platform).as_str() {
        "arch" | "manjaro" => (PACMAN, COMMON_PACKAGES),
        "ubuntu" | "debian" | "steamos" | "chromeos" => (APT, COMMON_PACKAGES),
        "fedora" => (DNF, COMMON_PACKAGES),
        "rhel" | "almalinux" => (DNF, EPEL_PACKAGES),
        "centos" => (YUM, EPEL_PACKAGES),
        "opensuse" => (ZYPPER, COMMON_PACKAGES),
        "gentoo" => (EMERGE, GENTOO_PACKAGES),
        _ => return None,
    };

    Some(PackageManagerSpec {
        invocation_prefix,
        packages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_supported_platform_has_packages() {
        for platform in SUPPORTED_PLATFORMS {
            let spec = package_manager_for(platform)
                .unwrap_or_else(|| panic!("no package manager for {platform}"));
            assert!(!spec.packages.is_empty(), "{platform} has no packages");
            assert!(!spec.invocation_prefix.is_empty());
        }
    }

    #[test]
    fn test_lookup_is_deterministic() {
        for platform in SUPPORTED_PLATFORMS {
            assert_eq!(package_manager_for(platform), package_manager_for(platform));
        }
    }

    #[test]
    fn test_unknown_platform() {
        assert!(package_manager_for("haiku").is_none());
        assert!(package_manager_for("").is_none());
    }

    #[test]
    fn test_opensuse_variants_and_case() {
        assert_eq!(
            package_manager_for("opensuse-tumbleweed"),
            package_manager_for("opensuse")
        );
        assert_eq!(package_manager_for("Ubuntu"), package_manager_for("ubuntu"));
    }

    #[test]
    fn test_enterprise_platforms_pull_in_epel() {
        let spec = package_manager_for("centos").unwrap();
        assert_eq!(spec.invocation_prefix, &["yum", "install", "-y"]);
        assert_eq!(spec.packages.first(), Some(&"epel-release"));

        let spec = package_manager_for("fedora").unwrap();
        assert!(!spec.packages.contains(&"epel-release"));
    }

    #[test]
    fn test_gentoo_uses_qualified_atoms() {
        let spec = package_manager_for("gentoo").unwrap();
        assert_eq!(spec.invocation_prefix, &["emerge", "--ask=n"]);
        assert!(spec.packages.iter().all(|p| p.contains('/')));
    }
}
