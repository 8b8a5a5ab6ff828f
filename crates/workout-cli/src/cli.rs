//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use workout_model::ParserConfig;

#[derive(Parser)]
#[command(
    name = "workout-flatten",
    version,
    about = "Flatten hand-typed workout spreadsheets into one row per set",
    long_about = "Flatten wide workout spreadsheet exports into long-form CSV.\n\n\
                  Each date column cell is parsed for weight, reps, side, settings\n\
                  and notes; every set becomes one row of the full and clean views."
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

    /// Log output format (pretty for humans, json for machine parsing).
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

    /// Allow raw cell text in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flatten one or more raw sheet exports into the full and clean CSV views.
    Flatten(FlattenArgs),

    /// Parse a single cell and print its parts.
    ParseCell(ParseCellArgs),
}

#[derive(Parser)]
pub struct FlattenArgs {
    /// Raw CSV exports, one sheet per file.
    #[arg(value_name = "RAW_CSV", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output prefix; `_full.csv` and `_clean.csv` are appended.
    #[arg(
        long = "out-prefix",
        value_name = "PATH",
        default_value = "./workouts_flattened"
    )]
    pub out_prefix: PathBuf,

    /// Parse and summarize without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    #[command(flatten)]
    pub parser: ParserArgs,
}

#[derive(Parser)]
pub struct ParseCellArgs {
    /// Cell text, quoted as one argument.
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub parser: ParserArgs,
}

/// Parser tuning shared by both subcommands.
#[derive(Args)]
pub struct ParserArgs {
    /// Trailing suffix treated as a cell feeling (repeatable; replaces the default `LLP`).
    #[arg(long = "global-feeling", value_name = "SUFFIX")]
    pub global_feelings: Vec<String>,
}

impl ParserArgs {
    pub fn to_config(&self) -> ParserConfig {
        if self.global_feelings.is_empty() {
            ParserConfig::default()
        } else {
            ParserConfig::default().with_global_feelings(&self.global_feelings)
        }
    }
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
