//! Shared CLI presentation utilities.
//!
//! Format-only: everything here turns domain values and events into
//! terminal lines. No decisions are made here.

pub mod console;
pub mod profile;

pub use console::{ConsoleEmitter, print_separator};
pub use profile::print_profile;
