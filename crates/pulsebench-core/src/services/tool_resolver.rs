//! Tool resolution and installation.
//!
//! Finds which required benchmark tools are missing, maps the platform to a
//! package-manager invocation, runs it with elevated privilege and verifies
//! the result. Re-running is safe: installed tools are detected and the
//! package manager is never invoked when nothing is missing.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{REQUIRED_TOOLS, package_manager_for};
use crate::ports::{CommandError, CommandRunner, OutputMode, ToolLocator, check_required_tools};

/// Program used to elevate the install command.
const ELEVATE: &str = "sudo";

/// Errors from resolving or installing tools.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// No package manager is known for this platform.
    #[error(
        "Cannot determine package list for platform '{platform}'. Install manually: {}",
        .missing.join(", ")
    )]
    UnsupportedPlatform {
        platform: String,
        missing: Vec<String>,
    },

    /// The package manager exited unsuccessfully.
    #[error("Package installation failed ({command}). Check your network connection or package sources.")]
    InstallFailed {
        command: String,
        #[source]
        source: CommandError,
    },

    /// Tools are still missing after installation.
    #[error("Still missing: {}. Please resolve manually.", .tools.join(", "))]
    StillMissing { tools: Vec<String> },
}

/// A fully resolved package-manager command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    /// Privilege-escalation program.
    pub program: String,
    /// Package manager verb and flags (e.g. `apt install -y`).
    pub manager: Vec<String>,
    /// Packages to install.
    pub packages: Vec<String>,
}

impl InstallPlan {
    /// Arguments passed to [`Self::program`].
    pub fn args(&self) -> Vec<String> {
        self.manager.iter().chain(&self.packages).cloned().collect()
    }

    /// Full command line for display.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program, self.args().join(" "))
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Resolves and installs the required benchmark tools.
pub struct ToolResolver {
    locator: Arc<dyn ToolLocator>,
    runner: Arc<dyn CommandRunner>,
    tools: Vec<String>,
}

impl ToolResolver {
    /// Create a resolver for [`REQUIRED_TOOLS`].
    pub fn new(locator: Arc<dyn ToolLocator>, runner: Arc<dyn CommandRunner>) -> Self {
        Self::with_tools(locator, runner, &REQUIRED_TOOLS)
    }

    /// Create a resolver for a custom tool list.
    pub fn with_tools<S: AsRef<str>>(
        locator: Arc<dyn ToolLocator>,
        runner: Arc<dyn CommandRunner>,
        tools: &[S],
    ) -> Self {
        Self {
            locator,
            runner,
            tools: tools.iter().map(|t| t.as_ref().to_string()).collect(),
        }
    }

    /// Tools not found on the execution path, in declaration order.
    pub fn missing_tools(&self) -> Vec<String> {
        let missing = check_required_tools(self.locator.as_ref(), &self.tools);
        debug!(?missing, "Checked required tools");
        missing
    }

    /// Build the install command for `platform`.
    ///
    /// `missing` is only used to tell the operator what to install by hand
    /// when the platform is unsupported.
    pub fn plan(&self, platform: &str, missing: &[String]) -> Result<InstallPlan, ResolverError> {
        let spec = package_manager_for(platform).ok_or_else(|| {
            ResolverError::UnsupportedPlatform {
                platform: platform.to_string(),
                missing: missing.to_vec(),
            }
        })?;

        Ok(InstallPlan {
            program: ELEVATE.to_string(),
            manager: owned(spec.invocation_prefix),
            packages: owned(spec.packages),
        })
    }

    /// Run the install command with the operator's terminal attached.
    ///
    /// Any non-zero exit is fatal; there is no partial-success handling.
    pub fn install(&self, plan: &InstallPlan) -> Result<(), ResolverError> {
        info!(command = %plan.command_line(), "Installing benchmark tools");
        self.runner
            .run(&plan.program, &plan.args(), OutputMode::Inherit)
            .map_err(|source| ResolverError::InstallFailed {
                command: plan.command_line(),
                source,
            })
    }

    /// Re-probe after installation and fail if any tool is still missing.
    pub fn verify(&self) -> Result<(), ResolverError> {
        let tools = self.missing_tools();
        if tools.is_empty() {
            Ok(())
        } else {
            Err(ResolverError::StillMissing { tools })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Locator whose installed set grows when the fake package manager runs.
    #[derive(Default)]
    struct FakeSystem {
        installed: Mutex<HashSet<String>>,
        provides: Vec<&'static str>,
        calls: Mutex<Vec<(String, Vec<String>)>>,
        fail_with: Option<i32>,
    }

    impl ToolLocator for FakeSystem {
        fn is_available(&self, tool: &str) -> bool {
            self.installed.lock().unwrap().contains(tool)
        }
    }

    impl CommandRunner for FakeSystem {
        fn run(
            &self,
            program: &str,
            args: &[String],
            _output: OutputMode,
        ) -> Result<(), CommandError> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            if let Some(code) = self.fail_with {
                return Err(CommandError::NonZeroExit {
                    program: program.to_string(),
                    code: Some(code),
                });
            }
            let mut installed = self.installed.lock().unwrap();
            installed.extend(self.provides.iter().map(|t| (*t).to_string()));
            Ok(())
        }
    }

    fn resolver(system: &Arc<FakeSystem>) -> ToolResolver {
        ToolResolver::new(system.clone(), system.clone())
    }

    #[test]
    fn test_plan_prefixes_sudo_and_manager() {
        let system = Arc::new(FakeSystem::default());
        let plan = resolver(&system).plan("debian", &[]).unwrap();

        assert_eq!(plan.program, "sudo");
        assert_eq!(
            plan.command_line(),
            "sudo apt install -y sysbench fio rt-tests glmark2"
        );
        assert_eq!(plan.manager.join(" "), "apt install -y");
    }

    #[test]
    fn test_unsupported_platform_is_hard_stop() {
        let system = Arc::new(FakeSystem::default());
        let r = resolver(&system);
        let missing = r.missing_tools();

        let err = r.plan("nixos", &missing).unwrap_err();
        match &err {
            ResolverError::UnsupportedPlatform { platform, missing } => {
                assert_eq!(platform, "nixos");
                assert_eq!(missing.len(), 4);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("sysbench, fio, cyclictest, glmark2"));
        assert!(system.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_install_then_verify_succeeds() {
        let system = Arc::new(FakeSystem {
            provides: REQUIRED_TOOLS.to_vec(),
            ..FakeSystem::default()
        });
        let r = resolver(&system);

        let plan = r.plan("arch", &r.missing_tools()).unwrap();
        r.install(&plan).unwrap();
        r.verify().unwrap();

        let calls = system.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "sudo");
        assert_eq!(calls[0].1[..3], ["pacman", "-S", "--noconfirm"]);
    }

    #[test]
    fn test_install_failure_is_fatal() {
        let system = Arc::new(FakeSystem {
            fail_with: Some(100),
            ..FakeSystem::default()
        });
        let r = resolver(&system);
        let plan = r.plan("ubuntu", &[]).unwrap();

        let err = r.install(&plan).unwrap_err();
        assert!(matches!(err, ResolverError::InstallFailed { .. }));
    }

    #[test]
    fn test_verify_reports_remaining_gaps() {
        let system = Arc::new(FakeSystem {
            provides: vec!["sysbench", "fio"],
            ..FakeSystem::default()
        });
        let r = resolver(&system);
        let plan = r.plan("fedora", &[]).unwrap();
        r.install(&plan).unwrap();

        match r.verify().unwrap_err() {
            ResolverError::StillMissing { tools } => {
                assert_eq!(tools, vec!["cyclictest", "glmark2"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nothing_missing_when_all_installed() {
        let system = Arc::new(FakeSystem::default());
        system
            .installed
            .lock()
            .unwrap()
            .extend(REQUIRED_TOOLS.iter().map(|t| (*t).to_string()));

        assert!(resolver(&system).missing_tools().is_empty());
    }
}
