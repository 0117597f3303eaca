//! Terminal formatting for fit results.
//!
//! Formatting lives here so the fitting code stays free of presentation and
//! output changes stay local to this file (golden tests below).

use crate::fit::{FitEntry, FitSelection};
use crate::domain::ModelKind;
use crate::models::{by_simplicity, fmt_coeff};

/// Column width of the model description in [`format_report`].
const MODEL_COLUMN: usize = 60;

/// Best model line followed by one line per attempted model.
///
/// Failed models are listed as `"<Name>: failed (<error>)"`.
pub fn format_report(selection: &FitSelection) -> String {
    let mut out = String::new();
    out.push_str(&format!("Best : {}\n", selection.best));
    for entry in &selection.fits {
        out.push_str(&report_line(entry));
        out.push('\n');
    }
    out
}

fn report_line(entry: &FitEntry) -> String {
    match &entry.error {
        Some(err) => format!("{}: failed ({err})", entry.model.kind()),
        None => format!(
            "{:<width$}    (res: {})",
            entry.model.to_string(),
            fmt_coeff(entry.residual),
            width = MODEL_COLUMN
        ),
    }
}

/// Tabular view of the successful fits, simplest first, then the skipped ones.
pub fn format_diagnostics(selection: &FitSelection) -> String {
    let mut out = String::new();
    out.push_str("Model diagnostics:\n");

    let best = selection.best.kind();
    let kinds: Vec<ModelKind> = selection.fits.iter().filter(|e| e.is_ok()).map(|e| e.model.kind()).collect();
    for kind in by_simplicity(&kinds) {
        let Some(entry) = selection.entry(kind) else {
            continue;
        };
        let chosen = if kind == best { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<12} {:<10} rank={:>2} res={}\n",
            kind.display_name(),
            kind.big_o(),
            kind.rank(),
            fmt_coeff(entry.residual),
        ));
    }
    for entry in selection.fits.iter().filter(|e| !e.is_ok()) {
        let reason = entry
            .error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "non-finite residual".to_string());
        out.push_str(&format!("  (skipped {}) {reason}\n", entry.model.kind()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComplexityError;
    use crate::models::ComplexityModel;

    fn fitted(kind: ModelKind) -> ComplexityModel {
        let mut m = ComplexityModel::new(kind);
        m.fit([1.0, 2.0, 3.0], [5.0, 8.0, 11.0]).unwrap();
        m
    }

    fn selection() -> FitSelection {
        let linear = fitted(ModelKind::Linear);
        FitSelection {
            best: linear.clone(),
            fits: vec![
                FitEntry {
                    model: fitted(ModelKind::Constant),
                    residual: 18.0,
                    error: None,
                },
                FitEntry {
                    model: linear,
                    residual: 0.0,
                    error: None,
                },
                FitEntry {
                    model: ComplexityModel::new(ModelKind::Polynomial),
                    residual: f64::NAN,
                    error: Some(ComplexityError::InvalidDomain {
                        model: ModelKind::Polynomial,
                        reason: "n must be > 0".to_string(),
                    }),
                },
            ],
            raw: None,
        }
    }

    #[test]
    fn report_golden() {
        let txt = format_report(&selection());
        let expected = format!(
            "Best : Linear: time = 2.0 + 3.0*n (sec)\n{:<60}    (res: 18)\n{:<60}    (res: 0.0)\n{}\n",
            "Constant: time = 8.0 (sec)",
            "Linear: time = 2.0 + 3.0*n (sec)",
            "Polynomial: failed (Polynomial: invalid domain: n must be > 0)",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn diagnostics_golden() {
        let txt = format_diagnostics(&selection());
        let expected = concat!(
            "Model diagnostics:\n",
            "  Constant     O(1)       rank=10 res=18\n",
            "* Linear       O(n)       rank=30 res=0.0\n",
            "  (skipped Polynomial) Polynomial: invalid domain: n must be > 0\n",
        );
        assert_eq!(txt, expected);
    }
}
