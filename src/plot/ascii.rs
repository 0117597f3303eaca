//! ASCII plotting for terminal output.
//!
//! Fixed-size character grid with deterministic output:
//! - measured points: `o`
//! - fitted curve: `-` line

use crate::domain::MeasurementSeries;
use crate::models::ComplexityModel;

/// Render measured points and the fitted curve of `best`.
///
/// The curve is omitted when `best` is not fitted or cannot be evaluated over
/// the measured size range.
pub fn render_ascii_plot(series: &MeasurementSeries, best: &ComplexityModel, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let points: Vec<(f64, f64)> = series.ns.iter().zip(&series.times).map(|(&n, &t)| (n as f64, t)).collect();
    let (n_min, n_max) = n_range(&points).unwrap_or((0.0, 1.0));
    let curve = sample_curve(best, n_min, n_max, width);

    render_plot(&points, curve.as_deref(), n_min, n_max, width, height)
}

fn render_plot(
    points: &[(f64, f64)],
    curve: Option<&[(f64, f64)]>,
    n_min: f64,
    n_max: f64,
    width: usize,
    height: usize,
) -> String {
    let (t_min, t_max) = y_range(points, curve).unwrap_or((0.0, 1.0));
    let (t_min, t_max) = pad_range(t_min, t_max, 0.05);
    let mut canvas = Canvas::new(width, height, (n_min, n_max), (t_min, t_max));

    // Curve first so points overlay it.
    if let Some(curve) = curve {
        for pair in curve.windows(2) {
            canvas.segment(pair[0], pair[1], '-');
        }
    }
    for &point in points {
        canvas.put(point, 'o');
    }

    let mut out = format!("Plot: n=[{n_min:.0}, {n_max:.0}] | time=[{t_min:.3e}, {t_max:.3e}]s\n");
    out.push_str(&canvas.render());
    out
}

fn n_range(points: &[(f64, f64)]) -> Option<(f64, f64)> {
    let min = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);
    (min.is_finite() && max > min).then_some((min, max))
}

fn sample_curve(model: &ComplexityModel, n_min: f64, n_max: f64, samples: usize) -> Option<Vec<(f64, f64)>> {
    let samples = samples.max(2);
    let ns: Vec<f64> = (0..samples)
        .map(|i| n_min + (n_max - n_min) * i as f64 / (samples as f64 - 1.0))
        .collect();
    let ys = model.compute(&ns).ok()?;
    let curve: Vec<(f64, f64)> = ns.into_iter().zip(ys).filter(|(_, y)| y.is_finite()).collect();
    (curve.len() >= 2).then_some(curve)
}

fn y_range(points: &[(f64, f64)], curve: Option<&[(f64, f64)]>) -> Option<(f64, f64)> {
    let ys = points.iter().chain(curve.unwrap_or(&[])).map(|p| p.1);
    let (min, max) = ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| (lo.min(y), hi.max(y)));
    (min.is_finite() && max.is_finite() && max > min).then_some((min, max))
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let pad = ((max - min).abs() * frac).max(1e-12);
    (min - pad, max + pad)
}

/// Character cells addressed in data coordinates `(n, t)`.
///
/// Row 0 is the top of the plot (largest time).
struct Canvas {
    cells: Vec<Vec<char>>,
    n_span: (f64, f64),
    t_span: (f64, f64),
}

impl Canvas {
    fn new(width: usize, height: usize, n_span: (f64, f64), t_span: (f64, f64)) -> Self {
        Self {
            cells: vec![vec![' '; width]; height],
            n_span,
            t_span,
        }
    }

    fn cols(&self) -> usize {
        self.cells[0].len()
    }

    fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Cell `(col, row)` of a data point, clamped to the canvas.
    fn cell(&self, (n, t): (f64, f64)) -> (usize, usize) {
        let fraction = |v: f64, (lo, hi): (f64, f64)| ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
        let last_col = (self.cols() - 1) as f64;
        let last_row = (self.rows() - 1) as f64;
        let col = (fraction(n, self.n_span) * last_col).round() as usize;
        let row = (last_row - fraction(t, self.t_span) * last_row).round() as usize;
        (col, row)
    }

    /// Overwrite the cell under a data point.
    fn put(&mut self, point: (f64, f64), ch: char) {
        let (col, row) = self.cell(point);
        self.cells[row][col] = ch;
    }

    /// Fill blank cells along the straight path between two data points.
    fn segment(&mut self, from: (f64, f64), to: (f64, f64), ch: char) {
        let (c0, r0) = self.cell(from);
        let (c1, r1) = self.cell(to);
        let dc = c1 as f64 - c0 as f64;
        let dr = r1 as f64 - r0 as f64;
        let steps = dc.abs().max(dr.abs()).max(1.0) as usize;
        for i in 0..=steps {
            let f = i as f64 / steps as f64;
            let col = (c0 as f64 + dc * f).round() as usize;
            let row = (r0 as f64 + dr * f).round() as usize;
            let cell = &mut self.cells[row][col];
            if *cell == ' ' {
                *cell = ch;
            }
        }
    }

    fn render(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.cols() + 1));
        for row in &self.cells {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}
