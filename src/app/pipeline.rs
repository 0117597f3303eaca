//! Shared run pipeline used by both `bigo estimate` and `bigo fit`.
//!
//! measurements (timed or loaded) -> fit + selection -> optional exports
//!
//! The caller only deals with presentation.

use std::path::PathBuf;

use tracing::info;

use crate::data::Workload;
use crate::domain::{MeasureConfig, MeasurementSeries, ModelKind};
use crate::error::AppError;
use crate::fit::{FitSelection, fit_and_select};
use crate::io::{read_measurements_json, write_measurements_json, write_selection_json};
use crate::models::ALL_MODELS;

/// Where the measurements come from.
#[derive(Debug, Clone)]
pub enum Source {
    /// Time a built-in workload.
    Workload {
        workload: Workload,
        measure: MeasureConfig,
        seed: u64,
    },
    /// Load a saved series.
    File(PathBuf),
}

/// Normalized run settings, built from CLI args.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: Source,
    /// Models to try; empty means all.
    pub models: Vec<ModelKind>,
    pub return_raw_data: bool,
    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    pub export_selection: Option<PathBuf>,
    pub save_measurements: Option<PathBuf>,
}

impl RunConfig {
    /// The registry to fit, in registry order.
    pub fn registry(&self) -> Vec<ModelKind> {
        if self.models.is_empty() {
            ALL_MODELS.to_vec()
        } else {
            self.models.clone()
        }
    }
}

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub series: MeasurementSeries,
    pub selection: FitSelection,
}

/// Acquire measurements, fit every model, and write the requested exports.
pub fn run_pipeline(config: &RunConfig) -> Result<RunOutput, AppError> {
    let series = match &config.source {
        Source::Workload {
            workload,
            measure,
            seed,
        } => {
            info!(workload = ?workload, min_n = measure.min_n, max_n = measure.max_n, "timing workload");
            workload.measure(measure, *seed)?
        }
        Source::File(path) => {
            info!(path = %path.display(), "loading measurements");
            read_measurements_json(path)?
        }
    };

    let selection = fit_and_select(&series, &config.registry(), config.return_raw_data)?;
    info!(best = %selection.best.kind(), "selected");

    if let Some(path) = &config.save_measurements {
        write_measurements_json(path, &series)?;
    }
    if let Some(path) = &config.export_selection {
        write_selection_json(path, &selection)?;
    }

    Ok(RunOutput { series, selection })
}
