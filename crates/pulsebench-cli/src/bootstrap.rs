//! Composition root: wires the runtime adapters into a context that
//! handlers borrow.

use std::path::PathBuf;
use std::sync::Arc;

use pulsebench_core::{CommandRunner, HostProbePort, ProfileStore, ToolLocator};
use pulsebench_runtime::{DefaultHostProbe, PathToolLocator, ProcessCommandRunner};

/// Dependencies shared by the benchmark-side handlers.
pub struct CliContext {
    pub store: ProfileStore,
    pub probe: Arc<dyn HostProbePort>,
    pub locator: Arc<dyn ToolLocator>,
    pub runner: Arc<dyn CommandRunner>,
}

impl CliContext {
    /// Real host adapters with the profile stored at `profile_path`.
    pub fn new(profile_path: impl Into<PathBuf>) -> Self {
        Self {
            store: ProfileStore::new(profile_path),
            probe: Arc::new(DefaultHostProbe::new()),
            locator: Arc::new(PathToolLocator::new()),
            runner: Arc::new(ProcessCommandRunner::new()),
        }
    }
}
