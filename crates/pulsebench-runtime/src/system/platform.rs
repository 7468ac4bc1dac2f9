//! Platform identifier detection from os-release.

use std::fs;
use std::path::Path;

/// Standard location of the os-release file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Extract the `ID=` value from os-release content.
///
/// Surrounding quotes are stripped and the value is lower-cased. Returns
/// `None` when there is no non-empty `ID` line.
pub fn parse_os_release_id(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("ID="))
        .map(|value| value.trim().trim_matches(['"', '\'']).to_lowercase())
        .find(|id| !id.is_empty())
}

/// Platform identifier read from the os-release file at `path`.
///
/// Falls back to the compile-target OS family when the file is missing or
/// has no `ID` line.
pub fn detect_platform_from(path: &Path) -> String {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| parse_os_release_id(&content))
        .unwrap_or_else(|| std::env::consts::OS.to_lowercase())
}
