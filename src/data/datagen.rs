//! Input generators: build the data a subject function runs on, given a size `n`.
//!
//! Random generators take an explicit RNG so measurements are reproducible
//! with `StdRng::seed_from_u64`.

use rand::Rng;
use rand::distributions::Uniform;
use rand_distr::StandardNormal;

/// ASCII letters, the default alphabet for [`strings`].
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The size itself.
pub fn n(n: u64) -> u64 {
    n
}

/// `[start, start + n)`.
pub fn range_n(n: u64, start: u64) -> Vec<u64> {
    (start..start + n).collect()
}

/// `n` uniform integers in `[min, max]` (both included).
///
/// # Panics
/// Panics if `min > max`.
pub fn integers<R: Rng + ?Sized>(n: u64, min: i64, max: i64, rng: &mut R) -> Vec<i64> {
    let dist = Uniform::new_inclusive(min, max);
    (0..n).map(|_| rng.sample(dist)).collect()
}

/// `n` large integers: `uniform(-50..=50) * 1_000_000 + uniform(0..=10_000)`.
pub fn large_integers<R: Rng + ?Sized>(n: u64, rng: &mut R) -> Vec<i64> {
    (0..n)
        .map(|_| rng.gen_range(-50..=50i64) * 1_000_000 + rng.gen_range(0..=10_000i64))
        .collect()
}

/// `n` standard-normal floats.
pub fn normal_floats<R: Rng + ?Sized>(n: u64, rng: &mut R) -> Vec<f64> {
    (0..n).map(|_| rng.sample(StandardNormal)).collect()
}

/// A string of `n` characters drawn uniformly from `chars`.
///
/// Returns an empty string when `chars` is empty.
pub fn strings<R: Rng + ?Sized>(n: u64, chars: &str, rng: &mut R) -> String {
    let alphabet: Vec<char> = chars.chars().collect();
    if alphabet.is_empty() {
        return String::new();
    }
    (0..n)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
