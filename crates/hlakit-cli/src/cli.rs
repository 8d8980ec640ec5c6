//! CLI argument definitions.

use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Default output of the `filter` and `reconcile` commands.
pub const DEFAULT_FILTERED_OUT: &str = "optitype_summary.filtered.tsv";

/// Default output of the `collect` command.
pub const DEFAULT_SUMMARY_OUT: &str = "optitype_summary.tsv";

#[derive(Parser)]
#[command(
    name = "hlakit",
    version,
    about = "Prepare HLA typings and junction counts for neoantigen prediction",
    long_about = "Prepare HLA typings and junction counts for neoantigen prediction.\n\n\
                  Matches requested samples to OptiType HLA summaries, either strictly by\n\
                  sample root or with patient-level backfill across timepoints, and prunes\n\
                  AltAnalyze junction count matrices."
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
    /// Gather per-sample OptiType results into one sample by HLA table.
    Collect(CollectArgs),

    /// Keep HLA rows whose sample root appears in the keep list.
    Filter(SelectionArgs),

    /// Emit one HLA row per requested sample, backfilling from other
    /// timepoints of the same patient.
    Reconcile(ReconcileArgs),

    /// Trim junction ids, merge duplicates and drop weakly supported junctions.
    Prune(PruneArgs),

    /// Check that every count-matrix sample has a usable HLA typing.
    Coverage(CoverageArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CollectArgs {
    /// OptiType result of one sample as SAMPLE=PATH (repeatable).
    #[arg(
        long = "result",
        value_name = "SAMPLE=PATH",
        value_parser = parse_result_arg,
        required = true
    )]
    pub results: Vec<ResultArg>,

    /// Output TSV with columns: sample, A1..C2, hla.
    #[arg(long = "out", value_name = "PATH", default_value = DEFAULT_SUMMARY_OUT)]
    pub out: PathBuf,
}

/// One `--result` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultArg {
    pub sample: String,
    pub path: PathBuf,
}

/// Parses `SAMPLE=PATH`, splitting at the first `=`.
pub fn parse_result_arg(raw: &str) -> Result<ResultArg> {
    let (sample, path) = raw
        .split_once('=')
        .with_context(|| format!("expected SAMPLE=PATH, got '{raw}'"))?;
    let sample = sample.trim();
    ensure!(!sample.is_empty(), "missing sample name in '{raw}'");
    ensure!(!path.is_empty(), "missing result path in '{raw}'");
    Ok(ResultArg {
        sample: sample.to_string(),
        path: PathBuf::from(path),
    })
}

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// TSV with columns: sample, hla.
    #[arg(long = "hla", value_name = "PATH")]
    pub hla: PathBuf,

    /// Text file of sample names to keep (with or without .bed).
    #[arg(long = "keep", value_name = "PATH")]
    pub keep: PathBuf,

    /// Output TSV.
    #[arg(long = "out", value_name = "PATH", default_value = DEFAULT_FILTERED_OUT)]
    pub out: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ReconcileArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Also write a JSON report of every resolution and missing sample.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Print a table showing which HLA row each request was matched to.
    #[arg(long = "details")]
    pub details: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PruneArgs {
    /// Junction count matrix (junction id in the first column).
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Pruned count matrix.
    #[arg(long = "out", value_name = "PATH")]
    pub out: PathBuf,

    /// Min total reads across cohort.
    #[arg(long = "min-sum", default_value_t = 10.0)]
    pub min_sum: f64,

    /// Min number of samples meeting --min-per-sample.
    #[arg(long = "min-samples", default_value_t = 1)]
    pub min_samples: usize,

    /// Min reads in a sample to count as supported.
    #[arg(long = "min-per-sample", default_value_t = 2.0)]
    pub min_per_sample: f64,

    /// Keep only junction ids like chr1:123:456:+.
    #[arg(long = "strict-uid")]
    pub strict_uid: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CoverageArgs {
    /// Junction count matrix whose sample columns need HLA typings.
    #[arg(long = "counts", value_name = "PATH")]
    pub counts: PathBuf,

    /// TSV with columns: sample, hla.
    #[arg(long = "hla", value_name = "PATH")]
    pub hla: PathBuf,
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
