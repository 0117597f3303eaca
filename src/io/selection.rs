//! Export fit selections as JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::domain::{ModelRecord, SelectionFile};
use crate::error::AppError;
use crate::fit::{FitEntry, FitSelection};
use crate::models::ComplexityModel;

/// Portable form of a selection: every attempted model plus the best one.
pub fn selection_file(selection: &FitSelection) -> SelectionFile {
    let best = selection
        .fits
        .iter()
        .find(|e| e.is_ok() && e.model.kind() == selection.best.kind())
        .map(entry_record)
        .unwrap_or_else(|| model_record(&selection.best, None, None));

    SelectionFile {
        tool: "bigo".to_string(),
        best,
        fits: selection.fits.iter().map(entry_record).collect(),
        measurements: selection.raw.clone(),
    }
}

/// Write a selection JSON file.
pub fn write_selection_json(path: &Path, selection: &FitSelection) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create selection JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &selection_file(selection))
        .map_err(|e| AppError::new(2, format!("Failed to write selection JSON: {e}")))?;
    Ok(())
}

fn entry_record(entry: &FitEntry) -> ModelRecord {
    let residual = entry.residual.is_finite().then_some(entry.residual);
    let failure = entry.error.as_ref().map(ToString::to_string);
    model_record(&entry.model, residual, failure)
}

fn model_record(model: &ComplexityModel, residual: Option<f64>, failure: Option<String>) -> ModelRecord {
    ModelRecord {
        kind: model.kind(),
        display: model.to_string(),
        rank: model.rank(),
        coefficients: model.coefficients().ok().map(<[f64]>::to_vec),
        residual,
        failure,
    }
}
