//! CLI argument definitions for the catalog ETL tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-etl",
    version,
    about = "Media catalog ETL - clean, normalize and load a catalog dataset",
    long_about = "Clean a denormalized media catalog CSV, decompose it into \
                  normalized entity and junction tables, and load the result \
                  into a relational database."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the source dataset and write the cleaned CSV.
    Clean(CleanArgs),

    /// Run the full pipeline: clean, transform and load into the database.
    Run(RunArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the denormalized source CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the cleaned CSV (default: <INPUT stem>_clean.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the denormalized source CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Transform and report only; skip the database load.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ConnectionArgs {
    /// Database server host (and optional port).
    #[arg(long = "server", default_value = "localhost")]
    pub server: String,

    /// Target database name.
    #[arg(long = "database", default_value = "catalog")]
    pub database: String,

    /// Database username. Requires --password; when both are omitted the
    /// connection uses trusted authentication.
    #[arg(long = "username", requires = "password")]
    pub username: Option<String>,

    /// Database password.
    #[arg(long = "password")]
    pub password: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
