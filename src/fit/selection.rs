//! Model selection over a registry of complexity models.
//!
//! The tool fits each registry model and keeps the running best. A candidate
//! replaces the current best only if its residual is smaller by more than
//! `SELECTION_EPSILON`, so among near-ties the earliest model in registry
//! order wins.
//!
//! A model that cannot be fitted (invalid domain, degenerate regression) is
//! kept in the result list with a non-finite residual and its error, and the
//! loop moves on to the next model.

use tracing::{debug, debug_span, warn};

use crate::domain::{MeasurementSeries, ModelKind};
use crate::error::ComplexityError;
use crate::math::{Sample, to_f64_vec};
use crate::models::ComplexityModel;

/// Minimum residual improvement needed to replace the current best model.
pub const SELECTION_EPSILON: f64 = 1e-6;

/// One tried model and how its fit went.
#[derive(Debug, Clone)]
pub struct FitEntry {
    /// The model; fitted unless `error` is set.
    pub model: ComplexityModel,
    /// Residual in the model's regression domain.
    ///
    /// `NaN` for an invalid domain, `+inf` for a degenerate fit.
    pub residual: f64,
    pub error: Option<ComplexityError>,
}

impl FitEntry {
    pub fn is_ok(&self) -> bool {
        self.error.is_none() && self.residual.is_finite()
    }
}

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct FitSelection {
    pub best: ComplexityModel,
    /// Every attempted model, in registry order.
    pub fits: Vec<FitEntry>,
    /// The measurements the fit was run on, when requested.
    pub raw: Option<MeasurementSeries>,
}

impl FitSelection {
    /// Residual of the best model.
    pub fn best_residual(&self) -> f64 {
        self.fits
            .iter()
            .find(|e| e.is_ok() && e.model.kind() == self.best.kind())
            .map(|e| e.residual)
            .unwrap_or(f64::NAN)
    }

    /// Entry for a given kind, if it was in the registry.
    pub fn entry(&self, kind: ModelKind) -> Option<&FitEntry> {
        self.fits.iter().find(|e| e.model.kind() == kind)
    }
}

/// Fit every model in `registry` and return the best one plus all entries.
///
/// # Errors
/// - `InvalidInput` for mismatched/empty inputs or an empty registry
/// - `NoViableModel` when no model produced a finite residual
pub fn infer_complexity<N, T>(
    ns: N,
    times: T,
    registry: &[ModelKind],
) -> Result<(ComplexityModel, Vec<FitEntry>), ComplexityError>
where
    N: IntoIterator,
    N::Item: Sample,
    T: IntoIterator,
    T::Item: Sample,
{
    let ns = to_f64_vec(ns);
    let times = to_f64_vec(times);
    if ns.len() != times.len() {
        return Err(ComplexityError::InvalidInput(format!(
            "length mismatch: {} sizes vs {} times",
            ns.len(),
            times.len()
        )));
    }
    if ns.is_empty() {
        return Err(ComplexityError::InvalidInput("measurement series is empty".to_string()));
    }
    if registry.is_empty() {
        return Err(ComplexityError::InvalidInput("model registry is empty".to_string()));
    }

    let _span = debug_span!("infer_complexity", points = ns.len(), models = registry.len()).entered();

    let mut fits = Vec::with_capacity(registry.len());
    let mut best: Option<usize> = None;
    let mut best_residual = f64::INFINITY;

    for &kind in registry {
        let mut model = ComplexityModel::new(kind);
        let entry = match model.fit(&ns, &times) {
            Ok(residual) => {
                debug!(model = %kind, residual, "fit");
                FitEntry {
                    model,
                    residual,
                    error: None,
                }
            }
            Err(err) => {
                let residual = match err {
                    ComplexityError::DegenerateFit { .. } => f64::INFINITY,
                    _ => f64::NAN,
                };
                warn!(model = %kind, error = %err, "model skipped");
                FitEntry {
                    model,
                    residual,
                    error: Some(err),
                }
            }
        };

        // NaN never compares smaller, so failed entries cannot win.
        if entry.residual < best_residual - SELECTION_EPSILON {
            best_residual = entry.residual;
            best = Some(fits.len());
        }
        fits.push(entry);
    }

    let Some(best) = best else {
        return Err(ComplexityError::NoViableModel);
    };
    debug!(best = %fits[best].model.kind(), residual = best_residual, "selected");
    Ok((fits[best].model.clone(), fits))
}

/// Fit and select the best model for a measurement series.
///
/// With `return_raw_data`, the series is attached to the result.
pub fn fit_and_select(
    series: &MeasurementSeries,
    registry: &[ModelKind],
    return_raw_data: bool,
) -> Result<FitSelection, ComplexityError> {
    series.validate()?;
    let (best, fits) = infer_complexity(&series.ns, &series.times, registry)?;
    Ok(FitSelection {
        best,
        fits,
        raw: return_raw_data.then(|| series.clone()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ALL_MODELS;

    fn grid() -> Vec<f64> {
        (0..100).map(|i| 10.0 + 90.0 * i as f64 / 99.0).collect()
    }

    fn assert_coeffs(actual: &[f64], expected: &[f64], label: &str) {
        assert_eq!(actual.len(), expected.len(), "{label}");
        for (a, e) in actual.iter().zip(expected) {
            let tol = 1e-2 * e.abs().max(1.0);
            assert!((a - e).abs() <= tol, "{label}: {actual:?} vs {expected:?}");
        }
    }

    #[test]
    fn selects_generating_class_on_noiseless_data() {
        let x = grid();
        let cases: Vec<(fn(f64) -> f64, ModelKind, Vec<f64>)> = vec![
            (|_| 2.0, ModelKind::Constant, vec![2.0]),
            (|x| 4.0 * x, ModelKind::Linear, vec![0.0, 4.0]),
            (|x| 1.5 + 3.0 * x * x, ModelKind::Quadratic, vec![1.5, 3.0]),
            (|x| 11.0 + 0.5 * x * x * x, ModelKind::Cubic, vec![11.0, 0.5]),
            (|x| 2.0 * x.powi(4), ModelKind::Polynomial, vec![2f64.ln(), 4.0]),
            (|x| 1.5 * x.ln(), ModelKind::Logarithmic, vec![0.0, 1.5]),
            (|x| 0.7 + x * x.ln(), ModelKind::Linearithmic, vec![0.7, 1.0]),
            (|x| 0.6f64.powf(x), ModelKind::Exponential, vec![0.0, 0.6f64.ln()]),
        ];

        for (f, kind, coeffs) in cases {
            let y: Vec<f64> = x.iter().map(|&v| f(v)).collect();
            let (best, fits) = infer_complexity(&x, &y, &ALL_MODELS).unwrap();
            assert_eq!(best.kind(), kind, "fits: {fits:?}");
            assert_coeffs(best.coefficients().unwrap(), &coeffs, kind.display_name());
            assert_eq!(fits.len(), ALL_MODELS.len());
        }
    }

    #[test]
    fn near_ties_keep_registry_order() {
        // Quadratic and Polynomial both fit 3*n^2 exactly; Quadratic comes first.
        let x = grid();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v * v).collect();
        let (best, _) = infer_complexity(&x, &y, &ALL_MODELS).unwrap();
        assert_eq!(best.kind(), ModelKind::Quadratic);

        let reversed = [ModelKind::Polynomial, ModelKind::Quadratic];
        let (best, _) = infer_complexity(&x, &y, &reversed).unwrap();
        assert_eq!(best.kind(), ModelKind::Polynomial);
    }

    #[test]
    fn candidate_within_epsilon_does_not_replace_best() {
        // Constant residual is below epsilon, so no later model can beat it.
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1e-5, 2e-5, 3e-5, 4e-5];
        let (best, fits) = infer_complexity(x, y, &ALL_MODELS).unwrap();
        assert_eq!(best.kind(), ModelKind::Constant);
        assert!(fits[1].residual < fits[0].residual);
    }

    #[test]
    fn invalid_domain_is_isolated() {
        let ns: Vec<u64> = (0..20).collect();
        let times: Vec<f64> = ns.iter().map(|&n| 1.0 + 2.0 * n as f64).collect();
        let (best, fits) = infer_complexity(&ns, &times, &ALL_MODELS).unwrap();
        assert_eq!(best.kind(), ModelKind::Linear);
        assert_eq!(fits.len(), ALL_MODELS.len());

        for entry in &fits {
            if entry.model.kind().uses_log_n() {
                assert!(entry.residual.is_nan());
                assert!(matches!(entry.error, Some(ComplexityError::InvalidDomain { .. })));
                assert!(!entry.model.is_fitted());
            } else {
                assert!(entry.is_ok(), "{:?}", entry);
            }
        }
    }

    #[test]
    fn degenerate_fits_are_marked_infinite() {
        let (best, fits) = infer_complexity([10u64], [0.5], &ALL_MODELS).unwrap();
        assert_eq!(best.kind(), ModelKind::Constant);
        for entry in &fits[1..] {
            assert_eq!(entry.residual, f64::INFINITY);
            assert!(matches!(entry.error, Some(ComplexityError::DegenerateFit { .. })));
        }
    }

    #[test]
    fn all_models_failing_is_an_error() {
        let registry = [ModelKind::Logarithmic, ModelKind::Polynomial];
        let err = infer_complexity([0u64, 0], [1.0, 1.0], &registry).unwrap_err();
        assert_eq!(err, ComplexityError::NoViableModel);
    }

    #[test]
    fn bad_inputs_fail_fast() {
        assert!(matches!(
            infer_complexity([1u64, 2], [1.0], &ALL_MODELS),
            Err(ComplexityError::InvalidInput(_))
        ));
        assert!(matches!(
            infer_complexity(Vec::<u64>::new(), Vec::<f64>::new(), &ALL_MODELS),
            Err(ComplexityError::InvalidInput(_))
        ));
        assert!(matches!(
            infer_complexity([1u64, 2], [1.0, 2.0], &[]),
            Err(ComplexityError::InvalidInput(_))
        ));
    }

    #[test]
    fn raw_data_is_attached_on_request() {
        let series = MeasurementSeries::new(vec![1, 2, 3, 4], vec![0.1, 0.2, 0.3, 0.4]).unwrap();
        let selection = fit_and_select(&series, &ALL_MODELS, true).unwrap();
        assert_eq!(selection.raw.as_ref(), Some(&series));
        assert_eq!(selection.best.kind(), ModelKind::Linear);
        assert!(selection.best_residual() < 1e-12);

        let selection = fit_and_select(&series, &ALL_MODELS, false).unwrap();
        assert!(selection.raw.is_none());
    }
}
