//! Command-line parsing for the `bigo` complexity estimator.
//!
//! Argument parsing and command dispatch stay separate from the measuring and
//! fitting code; `app` turns these structs into a `RunConfig`.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::data::Workload;
use crate::domain::{MeasureConfig, ModelKind};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "bigo", version, about = "Empirical big-O estimation from timing measurements")]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Time a built-in workload and report its best-fitting complexity class.
    Estimate(EstimateArgs),
    /// Fit a saved measurement series (JSON with `ns` and `times`).
    Fit(FitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct EstimateArgs {
    /// Workload to time.
    #[arg(short, long, value_enum)]
    pub workload: Workload,

    #[command(flatten)]
    pub timing: TimingArgs,

    /// Seed for random workload inputs.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Save the raw measurements to JSON (readable by `bigo fit`).
    #[arg(long = "save-measurements", value_name = "JSON")]
    pub save_measurements: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Measurement series JSON.
    #[arg(short, long, value_name = "JSON")]
    pub input: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Timing harness settings.
#[derive(Debug, Args, Clone, Copy)]
pub struct TimingArgs {
    /// Smallest input size.
    #[arg(long, default_value_t = MeasureConfig::default().min_n)]
    pub min_n: u64,

    /// Largest input size.
    #[arg(long, default_value_t = MeasureConfig::default().max_n)]
    pub max_n: u64,

    /// Number of sizes between min and max.
    #[arg(long, default_value_t = MeasureConfig::default().n_measures)]
    pub n_measures: usize,

    /// Calls per timed block.
    #[arg(long, default_value_t = MeasureConfig::default().n_repeats)]
    pub n_repeats: usize,

    /// Timed blocks per size (the minimum is kept).
    #[arg(long, default_value_t = MeasureConfig::default().n_timings)]
    pub n_timings: usize,
}

impl From<TimingArgs> for MeasureConfig {
    fn from(args: TimingArgs) -> Self {
        MeasureConfig {
            min_n: args.min_n,
            max_n: args.max_n,
            n_measures: args.n_measures,
            n_repeats: args.n_repeats,
            n_timings: args.n_timings,
        }
    }
}

/// Options shared by `estimate` and `fit`.
#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    /// Models to try, comma-separated (default: all).
    #[arg(long, value_enum, value_delimiter = ',')]
    pub models: Vec<ModelKind>,

    /// Include the raw measurements in the output.
    #[arg(long)]
    pub raw: bool,

    /// Render an ASCII plot of the measurements and the best fit.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// Export the selection (all fits + best) to JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
