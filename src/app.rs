//! Top-level application orchestration.
//!
//! `src/main.rs` stays tiny; this module is the real main that:
//! - parses CLI arguments and installs logging
//! - runs the measure/fit pipeline
//! - prints reports and plots

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, EstimateArgs, FitArgs, OutputArgs};
use crate::error::AppError;

pub mod pipeline;

use pipeline::{RunConfig, Source};

/// Entry point for the `bigo` binary.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match cli.command {
        Command::Estimate(args) => run_config_from_estimate(&args),
        Command::Fit(args) => run_config_from_fit(&args),
    };
    let run = pipeline::run_pipeline(&config)?;

    print!("{}", crate::report::format_report(&run.selection));
    println!();
    print!("{}", crate::report::format_diagnostics(&run.selection));

    if let Some(raw) = &run.selection.raw {
        println!();
        println!("Measurements:");
        for (n, t) in raw.ns.iter().zip(&raw.times) {
            println!("{n:>12} {t:.6e}");
        }
    }

    if config.plot {
        println!();
        print!(
            "{}",
            crate::plot::render_ascii_plot(&run.series, &run.selection.best, config.plot_width, config.plot_height)
        );
    }

    Ok(())
}

/// Logs go to stderr so report output on stdout stays clean for piping.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("big_o_fit=info"),
        1 => EnvFilter::new("big_o_fit=debug"),
        _ => EnvFilter::new("big_o_fit=trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run_config_from_estimate(args: &EstimateArgs) -> RunConfig {
    let mut config = run_config(
        Source::Workload {
            workload: args.workload,
            measure: args.timing.into(),
            seed: args.seed,
        },
        &args.output,
    );
    config.save_measurements = args.save_measurements.clone();
    config
}

pub fn run_config_from_fit(args: &FitArgs) -> RunConfig {
    run_config(Source::File(args.input.clone()), &args.output)
}

fn run_config(source: Source, output: &OutputArgs) -> RunConfig {
    RunConfig {
        source,
        models: output.models.clone(),
        return_raw_data: output.raw,
        plot: output.plot,
        plot_width: output.width,
        plot_height: output.height,
        export_selection: output.export.clone(),
        save_measurements: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MeasureConfig, ModelKind};
    use crate::models::ALL_MODELS;

    #[test]
    fn estimate_args_become_workload_source() {
        let cli = Cli::try_parse_from([
            "bigo", "estimate", "-w", "cubic", "--max-n", "50", "--save-measurements", "m.json",
        ])
        .unwrap();
        let Command::Estimate(args) = cli.command else {
            panic!("expected estimate");
        };
        let config = run_config_from_estimate(&args);
        match config.source {
            Source::Workload { measure, .. } => assert_eq!(
                measure,
                MeasureConfig {
                    max_n: 50,
                    ..MeasureConfig::default()
                }
            ),
            Source::File(_) => panic!("expected workload source"),
        }
        assert!(config.save_measurements.is_some());
        assert_eq!(config.registry(), ALL_MODELS.to_vec());
    }

    #[test]
    fn fit_args_keep_model_subset() {
        let cli = Cli::try_parse_from(["bigo", "fit", "-i", "m.json", "--models", "cubic", "--plot"]).unwrap();
        let Command::Fit(args) = cli.command else {
            panic!("expected fit");
        };
        let config = run_config_from_fit(&args);
        assert_eq!(config.registry(), vec![ModelKind::Cubic]);
        assert!(config.plot);
        assert!(config.save_measurements.is_none());
    }
}
