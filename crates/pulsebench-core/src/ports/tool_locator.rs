//! Tool presence detection port.

/// Answers whether an executable can be found on the execution path.
pub trait ToolLocator: Send + Sync {
    /// `true` when `tool` resolves to an executable.
    fn is_available(&self, tool: &str) -> bool;
}

/// Return the tools from `tools` that `locator` cannot find, preserving the
/// input order.
pub fn check_required_tools<S: AsRef<str>>(locator: &dyn ToolLocator, tools: &[S]) -> Vec<String> {
    tools
        .iter()
        .map(AsRef::as_ref)
        .filter(|tool| !locator.is_available(tool))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::REQUIRED_TOOLS;

    struct Always(bool);

    impl ToolLocator for Always {
        fn is_available(&self, _tool: &str) -> bool {
            self.0
        }
    }

    struct Only(&'static [&'static str]);

    impl ToolLocator for Only {
        fn is_available(&self, tool: &str) -> bool {
            self.0.contains(&tool)
        }
    }

    #[test]
    fn test_all_present_yields_empty() {
        assert!(check_required_tools(&Always(true), &REQUIRED_TOOLS).is_empty());
    }

    #[test]
    fn test_all_absent_yields_all_in_order() {
        let missing = check_required_tools(&Always(false), &REQUIRED_TOOLS);
        assert_eq!(missing, vec!["sysbench", "fio", "cyclictest", "glmark2"]);
    }

    #[test]
    fn test_partial_presence() {
        let missing = check_required_tools(&Only(&["fio", "sysbench"]), &REQUIRED_TOOLS);
        assert_eq!(missing, vec!["cyclictest", "glmark2"]);
    }
}
