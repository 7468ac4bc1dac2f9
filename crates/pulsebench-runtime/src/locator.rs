//! `PATH`-based tool locator.

use pulsebench_core::ports::ToolLocator;

/// Finds executables by searching `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathToolLocator;

impl PathToolLocator {
    pub const fn new() -> Self {
        Self
    }
}

impl ToolLocator for PathToolLocator {
    fn is_available(&self, tool: &str) -> bool {
        which::which(tool).is_ok()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_finds_shell() {
        assert!(PathToolLocator::new().is_available("sh"));
    }

    #[test]
    fn test_unknown_tool() {
        assert!(!PathToolLocator::new().is_available("pulsebench-no-such-tool"));
    }
}
