//! CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use pulsebench_cli::handlers::{self, run::RunArgs};
use pulsebench_cli::{Cli, CliContext, Commands, exit_code_for};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Setup => handlers::setup::execute(&CliContext::new(cli.profile)),
        Commands::Run {
            verbose,
            loops,
            stepped,
            threads,
        } => handlers::run::execute(
            &CliContext::new(cli.profile),
            &RunArgs {
                verbose,
                loops,
                stepped,
                threads,
            },
        ),
        Commands::Speedtest => handlers::speedtest::execute().await,
        Commands::Weather => handlers::weather::execute().await,
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    init_tracing(matches!(
        cli.command,
        Some(Commands::Run { verbose: true, .. })
    ));

    match dispatch(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("❌ {err:#}");
            let code = u8::try_from(exit_code_for(&err)).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
