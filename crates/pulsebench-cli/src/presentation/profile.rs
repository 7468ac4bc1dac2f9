//! Host profile summary printed by `setup`.

use pulsebench_core::HostProfile;

/// Lines describing `profile`, including containment warnings.
pub fn profile_lines(profile: &HostProfile) -> Vec<String> {
    let mut lines = vec![
        format!("{:<22}{}", "Detected Distro:", profile.distro),
        format!("{:<22}{}", "Kernel:", profile.kernel),
        format!(
            "{:<22}{} ({} threads)",
            "CPU:", profile.cpu, profile.cpu_threads
        ),
        format!("{:<22}{} GB", "RAM:", profile.ram_gb),
        format!("{:<22}{}", "Architecture:", profile.arch),
    ];
    if profile.is_wsl {
        lines.push("⚠️  Running inside WSL".to_string());
    }
    if profile.is_container {
        lines.push("⚠️  Running inside a container".to_string());
    }
    lines
}

pub fn print_profile(profile: &HostProfile) {
    for line in profile_lines(profile) {
        println!("{line}");
    }
}
