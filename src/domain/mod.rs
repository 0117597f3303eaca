//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the closed set of growth classes (`ModelKind`)
//! - timing measurements (`MeasurementSeries`) and harness settings (`MeasureConfig`)
//! - serializable selection outputs (`SelectionFile`, `ModelRecord`)

pub mod types;

pub use types::*;
