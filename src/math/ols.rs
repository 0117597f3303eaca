//! Least squares solver.
//!
//! Every complexity model reduces to a tiny linear regression:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! with one or two columns. The columns can differ by many orders of
//! magnitude (a column of ones next to `n^3` for `n` up to 1e5), so:
//! - columns are scaled to unit norm before decomposition and the
//!   coefficients are unscaled afterwards
//! - the decomposition is an SVD, which also handles tall matrices and lets
//!   us report the numerical rank
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)

use nalgebra::{DMatrix, DVector};

/// Singular values below this (after column equilibration) count as zero.
const RANK_TOL: f64 = 1e-10;

/// Solution of a least squares problem.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    /// Coefficients in the units of the original columns.
    pub beta: DVector<f64>,
    /// Numerical rank of the design matrix.
    pub rank: usize,
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<LeastSquares> {
    if x.nrows() != y.len() || x.ncols() == 0 {
        return None;
    }

    let mut scaled = x.clone();
    let mut scales = Vec::with_capacity(x.ncols());
    for j in 0..x.ncols() {
        let norm = x.column(j).norm();
        let scale = if norm.is_finite() && norm > 0.0 { norm } else { 1.0 };
        scaled.column_mut(j).scale_mut(1.0 / scale);
        scales.push(scale);
    }

    let svd = scaled.svd(true, true);
    let rank = svd
        .singular_values
        .iter()
        .filter(|&&s| s > RANK_TOL)
        .count();

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[RANK_TOL, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                let beta = DVector::from_iterator(
                    beta.len(),
                    beta.iter().zip(&scales).map(|(b, s)| b / s),
                );
                return Some(LeastSquares { beta, rank });
            }
        }
    }

    None
}

/// Sum of squared errors `Σ (y - Xβ)^2`.
pub fn sum_squared_error(x: &DMatrix<f64>, y: &DVector<f64>, beta: &DVector<f64>) -> f64 {
    (y - x * beta).norm_squared()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let fit = solve_least_squares(&x, &y).unwrap();
        assert!((fit.beta[0] - 2.0).abs() < 1e-10);
        assert!((fit.beta[1] - 3.0).abs() < 1e-10);
        assert_eq!(fit.rank, 2);
        assert!(sum_squared_error(&x, &y, &fit.beta) < 1e-20);
    }

    #[test]
    fn badly_scaled_columns_keep_full_rank() {
        // y = 1 + 2e-15 * n^3 with n up to 1e5.
        let ns: Vec<f64> = (1..=20).map(|i| i as f64 * 5_000.0).collect();
        let mut data = Vec::new();
        for &n in &ns {
            data.push(1.0);
            data.push(n * n * n);
        }
        let x = DMatrix::from_row_slice(ns.len(), 2, &data);
        let y = DVector::from_iterator(ns.len(), ns.iter().map(|n| 1.0 + 2e-15 * n * n * n));

        let fit = solve_least_squares(&x, &y).unwrap();
        assert_eq!(fit.rank, 2);
        assert!((fit.beta[0] - 1.0).abs() < 1e-8);
        assert!((fit.beta[1] - 2e-15).abs() < 1e-20);
    }

    #[test]
    fn collinear_columns_report_reduced_rank() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 4.0, 1.0, 4.0, 1.0, 4.0]);
        let y = DVector::from_row_slice(&[1.0, 1.0, 1.0]);
        let fit = solve_least_squares(&x, &y).unwrap();
        assert_eq!(fit.rank, 1);
    }
}
