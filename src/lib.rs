//! `big-o-fit` library crate.
//!
//! Empirical complexity estimation: time a function over increasing input
//! sizes, fit a fixed family of growth models by least squares, and report
//! the best one.
//!
//! The binary (`bigo`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the measuring/fitting API is usable directly from other crates

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod fit;
pub mod io;
pub mod math;
pub mod measure;
pub mod models;
pub mod plot;
pub mod report;

pub use domain::{MeasureConfig, MeasurementSeries, ModelKind};
pub use error::{AppError, ComplexityError};
pub use estimate::{estimate, try_estimate};
pub use fit::{FitEntry, FitSelection, SELECTION_EPSILON, fit_and_select, infer_complexity};
pub use measure::{measure, try_measure};
pub use models::{ALL_MODELS, ComplexityModel};
