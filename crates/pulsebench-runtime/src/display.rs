//! Graphical display detection for the GPU stage.

use std::ffi::OsStr;

/// Environment variables that indicate a graphical session.
pub const DISPLAY_VARS: [&str; 2] = ["DISPLAY", "WAYLAND_DISPLAY"];

/// Whether a graphical display is reachable from this process.
pub fn display_available() -> bool {
    display_available_with(|key| std::env::var_os(key))
}

/// Same as [`display_available`] with an injectable environment lookup.
pub fn display_available_with<F, V>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<V>,
    V: AsRef<OsStr>,
{
    DISPLAY_VARS
        .into_iter()
        .any(|key| lookup(key).is_some_and(|v| !v.as_ref().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_no_display_vars() {
        let vars = env(&[("HOME", "/root")]);
        assert!(!display_available_with(|k| vars.get(k)));
    }

    #[test]
    fn test_x11_or_wayland() {
        let x11 = env(&[("DISPLAY", ":0")]);
        assert!(display_available_with(|k| x11.get(k)));

        let wayland = env(&[("WAYLAND_DISPLAY", "wayland-0")]);
        assert!(display_available_with(|k| wayland.get(k)));
    }

    #[test]
    fn test_empty_value_is_unset() {
        let vars = env(&[("DISPLAY", "")]);
        assert!(!display_available_with(|k| vars.get(k)));
    }
}
