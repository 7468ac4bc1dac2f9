//! The `pulsebench` command-line adapter.
//!
//! Wires the runtime adapters into the core services and the metric
//! publishers, parses arguments with clap and renders progress for the
//! operator. `main.rs` only initialises logging and dispatches.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;
pub mod utils;

pub use bootstrap::CliContext;
pub use commands::Commands;
pub use error::{CliError, exit_code_for};
pub use parser::Cli;
