//! Growth functions and the numeric sample conversion used by the models.
//!
//! The growth functions are:
//!
//! - `ln(n)` (Logarithmic, Polynomial)
//! - `n ln(n)` (Linearithmic)
//! - `n^2`, `n^3` (Quadratic, Cubic)
//!
//! Numerical notes:
//! - `ln` is only defined for `n > 0`; the guarded variants return `None`
//!   instead of producing `-inf`/`NaN` so callers can report a domain error.
//! - `n ln(n)` is computed as a product, not as `ln(n^n)`, to avoid overflow.

/// A numeric sample accepted by `fit`/`compute`.
///
/// Implemented for the primitive float and integer types and for references
/// to them, so callers can pass `&[u64]`, `Vec<f64>`, iterators, etc.
pub trait Sample: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! impl_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_sample!(f64, f32, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<T: Sample> Sample for &T {
    #[inline]
    fn to_f64(self) -> f64 {
        (*self).to_f64()
    }
}

/// Collect any iterable of samples into `f64`s.
pub fn to_f64_vec<I>(values: I) -> Vec<f64>
where
    I: IntoIterator,
    I::Item: Sample,
{
    values.into_iter().map(Sample::to_f64).collect()
}

/// `ln(x)` for `x > 0`, `None` otherwise.
pub fn checked_ln(x: f64) -> Option<f64> {
    if x.is_finite() && x > 0.0 {
        Some(x.ln())
    } else {
        None
    }
}

/// `n ln(n)` for `n > 0`, `None` otherwise.
pub fn checked_n_ln_n(n: f64) -> Option<f64> {
    checked_ln(n).map(|ln| n * ln)
}
