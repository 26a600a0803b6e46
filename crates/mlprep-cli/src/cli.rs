//! CLI argument definitions for mlprep.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "mlprep",
    version,
    about = "Validate tabular training data and derive model features",
    long_about = "Validate tabular training data and derive model features.\n\n\
                  Reads a CSV file, checks it against a declarative schema and\n\
                  writes a feature table. Invalid data never reaches the output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a CSV file and derive the feature table.
    Prepare(PrepareArgs),

    /// Validate a CSV file without deriving features.
    Check(CheckArgs),

    /// Show the active schema.
    Schema(SchemaArgs),
}

#[derive(Parser)]
pub struct PrepareArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the feature table to this CSV file.
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of feature rows to print (0 disables the preview).
    #[arg(long = "preview", value_name = "N", default_value_t = 5)]
    pub preview: usize,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Options shared by commands that read a data file.
#[derive(Parser)]
pub struct SourceArgs {
    /// Schema JSON file (default: $MLPREP_SCHEMA, then the built-in training schema).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,

    /// Field delimiter: a single ASCII character, or `tab`.
    #[arg(
        long = "delimiter",
        short = 'd',
        value_name = "CHAR",
        default_value = ",",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,
}

#[derive(Parser)]
pub struct SchemaArgs {
    /// Schema JSON file (default: $MLPREP_SCHEMA, then the built-in training schema).
    #[arg(long = "schema", value_name = "FILE")]
    pub schema: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

/// Parse a `--delimiter` value into a single byte.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    if value == "tab" || value == "\\t" {
        return Ok(b'\t');
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && !matches!(c, '"' | '\n' | '\r') => {
            u8::try_from(c).map_err(|err| err.to_string())
        }
        _ => Err(format!(
            "expected a single ASCII character or `tab`, got {value:?}"
        )),
    }
}
