//! CLI argument definitions for the prediction ranker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prediction-ranker",
    version,
    about = "Re-rank classifier confidence scores into top-k predictions",
    long_about = "Post-process classifier scoring exports.\n\n\
                  Reads a CSV with a `prediction` column and per-class\n\
                  `confidence(<class>)` columns, and derives top-k ranked\n\
                  prediction/confidence column pairs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// Rank a scoring export and write the result.
    Rank(RankArgs),

    /// Show the schema detected for a scoring export.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct RankArgs {
    /// Path to the scored CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_ranked.csv next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// How many ranks to generate; clamped to the number of classes.
    #[arg(long = "ranks", value_name = "N", default_value_t = 2,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub ranks: u32,

    /// Keep the original confidence(<class>) columns in the output.
    ///
    /// By default the original per-class confidence columns are removed
    /// once the ranked pairs exist; the single predicted label is always
    /// removed.
    #[arg(long = "keep-old-confidences")]
    pub keep_old_confidences: bool,

    /// Skip header banner lines before the CSV header row.
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 0)]
    pub skip_rows: usize,

    /// Write a machine-readable run summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the scored CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Skip header banner lines before the CSV header row.
    #[arg(long = "skip-rows", value_name = "N", default_value_t = 0)]
    pub skip_rows: usize,
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
