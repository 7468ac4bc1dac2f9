//! Subcommands.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the host, install missing benchmark tools and save the profile
    Setup,

    /// Run the benchmark suite against the saved profile
    Run {
        /// Show the benchmark tools' own output
        #[arg(short, long)]
        verbose: bool,

        /// Run the whole suite N times
        #[arg(
            short = 'l',
            long = "loop",
            value_name = "N",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        loops: u32,

        /// Wait for Enter before each stage
        #[arg(short, long)]
        stepped: bool,

        /// Override the CPU stage thread count
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
        threads: Option<u32>,
    },

    /// Run an internet speed test and publish the result
    Speedtest,

    /// Fetch the current weather and publish it
    Weather,
}
