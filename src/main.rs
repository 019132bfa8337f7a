use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use whatprovides::{Cli, handlers::run_normal_mode};

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "WHATPROVIDES_LOG";

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    run_normal_mode(&cli).into()
}
