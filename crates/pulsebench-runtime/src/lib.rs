//! OS-level adapters for PulseBench.
//!
//! Implements the pulsebench-core ports against the real host: the host
//! probe, the `PATH` tool locator, the blocking process runner and the
//! display check that gates the GPU stage.

#![deny(unsafe_code)]

pub mod display;
pub mod locator;
pub mod process;
pub mod system;

pub use display::display_available;
pub use locator::PathToolLocator;
pub use process::ProcessCommandRunner;
pub use system::DefaultHostProbe;
