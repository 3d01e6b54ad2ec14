//! CLI argument definitions for the visa analysis.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use visa_model::DEFAULT_TOP_N;

#[derive(Parser)]
#[command(
    name = "visa-eda",
    version,
    about = "Exploratory analysis of US permanent (PERM) visa applications",
    long_about = "Clean, summarize, chart, and label-encode the US PERM visa \
                  applications dataset.\n\n\
                  Reads us_perm_visas.csv and writes cleaned_us_perm_visas.csv \
                  plus one SVG chart per summary."
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
    /// Run the full analysis: load, clean, summarize, encode, write.
    Analyze(AnalyzeArgs),

    /// List the input columns the analysis requires.
    Columns,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Visa applications CSV to read.
    #[arg(long = "input", value_name = "PATH", default_value = "us_perm_visas.csv")]
    pub input: PathBuf,

    /// Destination for the cleaned and encoded CSV (overwritten).
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "cleaned_us_perm_visas.csv"
    )]
    pub output: PathBuf,

    /// Directory receiving one SVG chart per summary.
    #[arg(long = "charts-dir", value_name = "DIR", default_value = "charts")]
    pub charts_dir: PathBuf,

    /// Skip chart rendering.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Number of categories kept by the top-N charts.
    #[arg(
        long = "top-n",
        value_name = "N",
        default_value_t = DEFAULT_TOP_N,
        value_parser = clap::value_parser!(usize)
    )]
    pub top_n: usize,

    /// Also write every frequency summary as JSON.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
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
