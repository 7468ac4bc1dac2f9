//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use pulsebench_core::DEFAULT_PROFILE_FILE;

use crate::commands::Commands;

/// Command-line interface definition for the benchmark suite.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "pulsebench")]
#[command(about = "PulseBench - System Benchmark Suite")]
#[command(version)]
pub struct Cli {
    /// Path of the host profile written by `setup`
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_PROFILE_FILE)]
    pub profile: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
