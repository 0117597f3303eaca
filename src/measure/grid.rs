//! Input-size grid generation.
//!
//! Sizes are evenly spaced in floating point and truncated toward zero, so
//! narrow ranges with many measures produce repeated sizes. Those are kept:
//! the fit simply sees several samples at one size.

use crate::error::ComplexityError;

/// Generate `steps` evenly spaced sizes between `min` and `max` (inclusive).
pub fn linear_sizes(min: u64, max: u64, steps: usize) -> Result<Vec<u64>, ComplexityError> {
    if min > max {
        return Err(ComplexityError::InvalidInput(format!(
            "Invalid size range: min={min}, max={max} (must satisfy min <= max)."
        )));
    }
    if steps == 0 {
        return Err(ComplexityError::InvalidInput("Size steps must be >= 1.".to_string()));
    }
    if steps == 1 {
        return Ok(vec![min]);
    }

    let lo = min as f64;
    let step = (max as f64 - lo) / (steps as f64 - 1.0);

    let mut out = Vec::with_capacity(steps);
    for i in 0..steps {
        let n = if i == steps - 1 { max } else { (lo + step * i as f64) as u64 };
        out.push(n);
    }
    Ok(out)
}
