//! Complexity model evaluation and fitting.
//!
//! The fitter relies on two primitive operations:
//! - build a design row for a given size `n` (for least squares)
//! - transform the observed time into the regression target
//!
//! Both are implemented here for each model kind. `ComplexityModel` owns the
//! fitted coefficients and exposes `fit` / `compute` on top of them.

use std::cmp::Ordering;
use std::fmt;

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::ModelKind;
use crate::error::ComplexityError;
use crate::math::{Sample, checked_ln, checked_n_ln_n, solve_least_squares, sum_squared_error, to_f64_vec};

/// Fill a design row for the given model kind.
///
/// The row includes the constant term first (intercept).
///
/// # Panics
/// Panics if `out` does not have length `model.coefficient_count()`.
pub fn fill_design_row(model: ModelKind, n: f64, out: &mut [f64]) -> Result<(), ComplexityError> {
    out[0] = 1.0;
    let column = match model {
        ModelKind::Constant => return Ok(()),
        ModelKind::Linear | ModelKind::Exponential => n,
        ModelKind::Quadratic => n * n,
        ModelKind::Cubic => n * n * n,
        ModelKind::Logarithmic | ModelKind::Polynomial => checked_ln(n).ok_or_else(|| domain(model, "ln(n)", n))?,
        ModelKind::Linearithmic => checked_n_ln_n(n).ok_or_else(|| domain(model, "n*ln(n)", n))?,
    };
    if !column.is_finite() {
        return Err(domain(model, "basis", n));
    }
    out[1] = column;
    Ok(())
}

/// Map an observed time into the model's regression domain.
pub fn target_value(model: ModelKind, t: f64) -> Result<f64, ComplexityError> {
    if model.uses_log_time() {
        checked_ln(t).ok_or_else(|| domain(model, "ln(t)", t))
    } else if t.is_finite() {
        Ok(t)
    } else {
        Err(domain(model, "t", t))
    }
}

fn domain(model: ModelKind, what: &str, value: f64) -> ComplexityError {
    ComplexityError::InvalidDomain {
        model,
        reason: format!("{what} is undefined for {value}"),
    }
}

/// A growth model that can be fitted to `(n, t)` measurements.
///
/// Comparisons (`==`, `<`, ...) look at the simplicity rank only; two
/// instances of the same kind compare equal whatever their coefficients.
///
/// Deserializing checks the coefficient count against the kind, so a loaded
/// model is either unfitted or safe to `compute` and display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredModel", into = "StoredModel")]
pub struct ComplexityModel {
    kind: ModelKind,
    coefficients: Option<Vec<f64>>,
}

/// Unchecked wire form of [`ComplexityModel`].
#[derive(Serialize, Deserialize)]
struct StoredModel {
    kind: ModelKind,
    coefficients: Option<Vec<f64>>,
}

impl TryFrom<StoredModel> for ComplexityModel {
    type Error = ComplexityError;

    fn try_from(stored: StoredModel) -> Result<Self, Self::Error> {
        if let Some(c) = &stored.coefficients {
            let required = stored.kind.coefficient_count();
            if c.len() != required {
                return Err(ComplexityError::InvalidInput(format!(
                    "{} needs {required} coefficients, got {}",
                    stored.kind,
                    c.len()
                )));
            }
            if c.iter().any(|v| !v.is_finite()) {
                return Err(ComplexityError::InvalidInput(format!(
                    "{} coefficients must be finite",
                    stored.kind
                )));
            }
        }
        Ok(Self {
            kind: stored.kind,
            coefficients: stored.coefficients,
        })
    }
}

impl From<ComplexityModel> for StoredModel {
    fn from(model: ComplexityModel) -> Self {
        Self {
            kind: model.kind,
            coefficients: model.coefficients,
        }
    }
}

impl ComplexityModel {
    /// A fresh, unfitted model.
    pub fn new(kind: ModelKind) -> Self {
        Self {
            kind,
            coefficients: None,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn rank(&self) -> u8 {
        self.kind.rank()
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Basis matrix `X` (`len(ns) x k`) for the given sizes.
    pub fn design_matrix(&self, ns: &[f64]) -> Result<DMatrix<f64>, ComplexityError> {
        let k = self.kind.coefficient_count();
        let mut data = vec![0.0; ns.len() * k];
        for (row, &n) in data.chunks_exact_mut(k).zip(ns) {
            fill_design_row(self.kind, n, row)?;
        }
        Ok(DMatrix::from_row_slice(ns.len(), k, &data))
    }

    /// Regression target `y` for the given times.
    pub fn target(&self, ts: &[f64]) -> Result<DVector<f64>, ComplexityError> {
        let y = ts
            .iter()
            .map(|&t| target_value(self.kind, t))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DVector::from_vec(y))
    }

    /// Fit the model and return the residual sum of squares in the
    /// regression domain.
    ///
    /// On error the previous coefficients (if any) are left untouched.
    pub fn fit<N, T>(&mut self, ns: N, ts: T) -> Result<f64, ComplexityError>
    where
        N: IntoIterator,
        N::Item: Sample,
        T: IntoIterator,
        T::Item: Sample,
    {
        let ns = to_f64_vec(ns);
        let ts = to_f64_vec(ts);
        if ns.len() != ts.len() {
            return Err(ComplexityError::InvalidInput(format!(
                "length mismatch: {} sizes vs {} times",
                ns.len(),
                ts.len()
            )));
        }
        if ns.is_empty() {
            return Err(ComplexityError::InvalidInput("no measurements to fit".to_string()));
        }

        let x = self.design_matrix(&ns)?;
        let y = self.target(&ts)?;

        let required = self.kind.coefficient_count();
        let degenerate = |rank| ComplexityError::DegenerateFit {
            model: self.kind,
            points: ns.len(),
            required,
            rank,
        };
        if ns.len() < required {
            return Err(degenerate(ns.len().min(required)));
        }
        let solution = solve_least_squares(&x, &y).ok_or_else(|| degenerate(0))?;
        if solution.rank < required {
            return Err(degenerate(solution.rank));
        }

        let residual = sum_squared_error(&x, &y, &solution.beta);
        trace!(model = %self.kind, beta = ?solution.beta.as_slice(), residual, "fitted");
        self.coefficients = Some(solution.beta.iter().copied().collect());
        Ok(residual)
    }

    /// Predicted times (seconds) for the given sizes.
    ///
    /// Log-target models are mapped back from `ln(t)` so the output is
    /// directly comparable with the times passed to `fit`.
    pub fn compute<N>(&self, ns: N) -> Result<Vec<f64>, ComplexityError>
    where
        N: IntoIterator,
        N::Item: Sample,
    {
        let beta = DVector::from_column_slice(self.coefficients()?);
        let x = self.design_matrix(&to_f64_vec(ns))?;
        let y = x * beta;
        if self.kind.uses_log_time() {
            Ok(y.iter().map(|v| v.exp()).collect())
        } else {
            Ok(y.iter().copied().collect())
        }
    }

    /// Fitted coefficients in the regression domain (intercept first).
    pub fn coefficients(&self) -> Result<&[f64], ComplexityError> {
        self.coefficients
            .as_deref()
            .ok_or(ComplexityError::NotFitted { model: self.kind })
    }

    fn format_fitted(&self, c: &[f64]) -> String {
        let a = || fmt_coeff(c[0]);
        let b = || fmt_coeff(c[1]);
        match self.kind {
            ModelKind::Constant => format!("time = {}", a()),
            ModelKind::Linear => format!("time = {} + {}*n", a(), b()),
            ModelKind::Quadratic => format!("time = {} + {}*n^2", a(), b()),
            ModelKind::Cubic => format!("time = {} + {}*n^3", a(), b()),
            ModelKind::Logarithmic => format!("time = {} + {}*log(n)", a(), b()),
            ModelKind::Linearithmic => format!("time = {} + {}*n*log(n)", a(), b()),
            ModelKind::Polynomial => format!("time = {} * x^{}", fmt_coeff(c[0].exp()), b()),
            // The base e^b is within rounding of 1 for realistic fits, so show the rate.
            ModelKind::Exponential => format!("time = {} * exp({}*n)", fmt_coeff(c[0].exp()), b()),
        }
    }
}

/// Two significant digits, switching to scientific notation outside
/// `[1e-3, 1e4)`.
pub fn fmt_coeff(v: f64) -> String {
    if v == 0.0 {
        return "0.0".to_string();
    }
    // Rounding first keeps 9.99 from gaining a digit.
    let sci = format!("{v:.1e}");
    let exp = sci
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);
    if (-3..4).contains(&exp) {
        let decimals = (1 - exp).max(0) as usize;
        format!("{v:.decimals$}")
    } else {
        sci
    }
}

impl fmt::Display for ComplexityModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.coefficients {
            Some(c) => write!(f, "{}: {} (sec)", self.kind, self.format_fitted(c)),
            None => write!(f, "{}: not yet fitted", self.kind),
        }
    }
}

impl PartialEq for ComplexityModel {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}

impl Eq for ComplexityModel {}

impl PartialOrd for ComplexityModel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComplexityModel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}
