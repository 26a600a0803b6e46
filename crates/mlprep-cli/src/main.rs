//! mlprep command-line interface.

use clap::{ColorChoice, Parser};
use mlprep_cli::cli::{Cli, Command};
use mlprep_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod commands;

use crate::commands::{run_check, run_prepare, run_schema};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Prepare(args) => run_prepare(args),
        Command::Check(args) => run_check(args),
        Command::Schema(args) => run_schema(args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Logging configuration from CLI flags.
///
/// `--log-level` beats `-v/-q`; `RUST_LOG` applies only when neither is given.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.map(LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
        ..LogConfig::default()
    }
    .with_level(explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()))
    .with_format(cli.log_format.into())
    .with_ansi(with_ansi)
    .with_log_file(cli.log_file.clone())
}
