//! Read/write measurement series as JSON.
//!
//! The on-disk shape is `MeasurementSeries` itself: `{"ns": [...], "times": [...]}`.
//! Reading validates the series so a hand-edited file fails early.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::domain::MeasurementSeries;
use crate::error::AppError;

/// Write a measurement series JSON file.
pub fn write_measurements_json(path: &Path, series: &MeasurementSeries) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create measurements JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(BufWriter::new(file), series)
        .map_err(|e| AppError::new(2, format!("Failed to write measurements JSON: {e}")))?;
    Ok(())
}

/// Read and validate a measurement series JSON file.
pub fn read_measurements_json(path: &Path) -> Result<MeasurementSeries, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open measurements JSON '{}': {e}", path.display())))?;
    let series: MeasurementSeries = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid measurements JSON: {e}")))?;
    series.validate()?;
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.json");
        let series = MeasurementSeries::new(vec![1, 5, 10], vec![0.5, 1.5, 3.0]).unwrap();

        write_measurements_json(&path, &series).unwrap();
        let back = read_measurements_json(&path).unwrap();
        assert_eq!(back.ns, series.ns);
        assert_eq!(back.times, series.times);
    }

    #[test]
    fn invalid_series_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"ns": [1, 2], "times": [1.0]}"#).unwrap();

        let err = read_measurements_json(&path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("length"), "{err}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_measurements_json(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open"), "{err}");
    }
}
