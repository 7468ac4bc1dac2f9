//! Command handlers.
//!
//! Each handler is a thin wrapper: it builds the service it needs from the
//! [`CliContext`](crate::bootstrap::CliContext) or the environment, calls it,
//! and prints progress for the operator. Library errors are converted to
//! [`CliError`](crate::error::CliError) so `main` can pick an exit code.

pub mod run;
pub mod setup;
pub mod speedtest;
pub mod weather;
