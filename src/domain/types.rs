//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during measuring and fitting
//! - exported to JSON
//! - reloaded later for refitting or plotting

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ComplexityError;

/// A growth-rate hypothesis fitted against timing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Constant,
    Logarithmic,
    Linear,
    Linearithmic,
    Quadratic,
    Cubic,
    Polynomial,
    Exponential,
}

impl ModelKind {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::Constant => "Constant",
            ModelKind::Logarithmic => "Logarithmic",
            ModelKind::Linear => "Linear",
            ModelKind::Linearithmic => "Linearithmic",
            ModelKind::Quadratic => "Quadratic",
            ModelKind::Cubic => "Cubic",
            ModelKind::Polynomial => "Polynomial",
            ModelKind::Exponential => "Exponential",
        }
    }

    /// Big-O label of the growth class.
    pub fn big_o(self) -> &'static str {
        match self {
            ModelKind::Constant => "O(1)",
            ModelKind::Logarithmic => "O(log n)",
            ModelKind::Linear => "O(n)",
            ModelKind::Linearithmic => "O(n log n)",
            ModelKind::Quadratic => "O(n^2)",
            ModelKind::Cubic => "O(n^3)",
            ModelKind::Polynomial => "O(n^k)",
            ModelKind::Exponential => "O(c^n)",
        }
    }

    /// Simplicity rank: lower is simpler.
    ///
    /// Used to order models for display. Selection never looks at it.
    pub fn rank(self) -> u8 {
        match self {
            ModelKind::Constant => 10,
            ModelKind::Logarithmic => 20,
            ModelKind::Linear => 30,
            ModelKind::Linearithmic => 40,
            ModelKind::Quadratic => 50,
            ModelKind::Cubic => 60,
            ModelKind::Polynomial => 70,
            ModelKind::Exponential => 80,
        }
    }

    /// Number of regression coefficients (intercept included).
    pub fn coefficient_count(self) -> usize {
        match self {
            ModelKind::Constant => 1,
            _ => 2,
        }
    }

    /// Whether the basis column involves `ln(n)`.
    pub fn uses_log_n(self) -> bool {
        matches!(
            self,
            ModelKind::Logarithmic | ModelKind::Linearithmic | ModelKind::Polynomial
        )
    }

    /// Whether the regression target is `ln(t)` instead of `t`.
    pub fn uses_log_time(self) -> bool {
        matches!(self, ModelKind::Polynomial | ModelKind::Exponential)
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Timing measurements: `times[i]` is the cumulative elapsed time (seconds)
/// for `n_repeats` calls at input size `ns[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSeries {
    pub ns: Vec<u64>,
    pub times: Vec<f64>,
}

impl MeasurementSeries {
    /// Build a validated series.
    pub fn new(ns: Vec<u64>, times: Vec<f64>) -> Result<Self, ComplexityError> {
        let series = Self { ns, times };
        series.validate()?;
        Ok(series)
    }

    /// Check the structural invariants of a series.
    ///
    /// Sizes must be non-decreasing; repeated sizes are allowed because the
    /// harness can produce them for narrow ranges.
    pub fn validate(&self) -> Result<(), ComplexityError> {
        if self.ns.is_empty() {
            return Err(ComplexityError::InvalidInput(
                "measurement series is empty".to_string(),
            ));
        }
        if self.ns.len() != self.times.len() {
            return Err(ComplexityError::InvalidInput(format!(
                "length mismatch: {} sizes vs {} times",
                self.ns.len(),
                self.times.len()
            )));
        }
        if let Some(w) = self.ns.windows(2).find(|w| w[1] < w[0]) {
            return Err(ComplexityError::InvalidInput(format!(
                "sizes must be non-decreasing (found {} after {})",
                w[1], w[0]
            )));
        }
        if let Some(t) = self.times.iter().find(|t| !(t.is_finite() && **t >= 0.0)) {
            return Err(ComplexityError::InvalidInput(format!(
                "times must be finite and non-negative (found {t})"
            )));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.ns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ns.is_empty()
    }
}

/// Timing harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasureConfig {
    /// Smallest input size (inclusive).
    pub min_n: u64,
    /// Largest input size (inclusive).
    pub max_n: u64,
    /// Number of sizes between `min_n` and `max_n`.
    pub n_measures: usize,
    /// Calls per timed block; the recorded time is cumulative over these.
    pub n_repeats: usize,
    /// Timed blocks per size; the minimum is kept.
    pub n_timings: usize,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            min_n: 100,
            max_n: 100_000,
            n_measures: 10,
            n_repeats: 1,
            n_timings: 1,
        }
    }
}

impl MeasureConfig {
    pub fn validate(&self) -> Result<(), ComplexityError> {
        if self.min_n > self.max_n {
            return Err(ComplexityError::InvalidInput(format!(
                "min_n ({}) must not exceed max_n ({})",
                self.min_n, self.max_n
            )));
        }
        if self.n_measures == 0 {
            return Err(ComplexityError::InvalidInput("n_measures must be >= 1".to_string()));
        }
        if self.n_repeats == 0 {
            return Err(ComplexityError::InvalidInput("n_repeats must be >= 1".to_string()));
        }
        if self.n_timings == 0 {
            return Err(ComplexityError::InvalidInput("n_timings must be >= 1".to_string()));
        }
        Ok(())
    }
}

/// One model's entry in a saved selection file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRecord {
    pub kind: ModelKind,
    pub display: String,
    pub rank: u8,
    pub coefficients: Option<Vec<f64>>,
    /// `None` when the fit failed (JSON has no NaN/inf).
    pub residual: Option<f64>,
    pub failure: Option<String>,
}

/// A saved selection (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionFile {
    pub tool: String,
    pub best: ModelRecord,
    pub fits: Vec<ModelRecord>,
    pub measurements: Option<MeasurementSeries>,
}
