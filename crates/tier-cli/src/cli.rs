//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tier",
    version,
    about = "PSU tier list tools - parse the sheet, build the alias index, look up titles",
    long_about = "Parse the published PSU tier list spreadsheet into records, build the\n\
                  brand alias index consumed by the browser script, and look up the tier\n\
                  of a product listing title."
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
    /// Extract product records from a saved HTML export of the tier list.
    Parse(ParseArgs),

    /// Build the brand alias index from a records file.
    Index(IndexArgs),

    /// Look up the tier of a listing title.
    Lookup(LookupArgs),
}

#[derive(Parser)]
pub struct ParseArgs {
    /// HTML export of the spreadsheet.
    #[arg(value_name = "HTML")]
    pub html: PathBuf,

    /// Write records here (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JSON column layout replacing the built-in column mapping.
    #[arg(long = "layout", value_name = "PATH")]
    pub layout: Option<PathBuf>,

    /// CSS selector of the data table.
    #[arg(long = "selector", value_name = "CSS")]
    pub selector: Option<String>,
}

#[derive(Parser)]
pub struct IndexArgs {
    /// Records file written by `tier parse`.
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Write the index here (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Escape `<`, `>` and `&` so the JSON can be pasted into a script body.
    #[arg(long = "script-safe")]
    pub script_safe: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Records file written by `tier parse`.
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,

    /// Product listing title.
    #[arg(long = "title")]
    pub title: String,

    /// Product wattage; omit or pass 0 when unknown.
    #[arg(long = "wattage")]
    pub wattage: Option<u32>,

    /// Apply listing-site title rewrites and ignore the `gaming` brand key.
    #[arg(long = "listing")]
    pub listing: bool,
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
