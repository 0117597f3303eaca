//! Built-in subject functions with known complexity.
//!
//! Used by the `bigo estimate` command and by the end-to-end tests. Each
//! workload pairs an input generator with a subject whose cost grows in a
//! known way with `n`.

use std::hint::black_box;

use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::data::datagen;
use crate::domain::{MeasureConfig, MeasurementSeries, ModelKind};
use crate::error::ComplexityError;
use crate::measure::measure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    /// Returns immediately.
    Constant,
    /// Sums `0..n*1000`.
    Linear,
    /// Sums `i + j` over an `n x n` grid.
    Quadratic,
    /// Counts triples over an `n x n x n` grid.
    Cubic,
    /// Sorts `n*100` standard-normal floats.
    Sort,
}

impl Workload {
    /// The class a correct estimate should report.
    pub fn expected(self) -> ModelKind {
        match self {
            Workload::Constant => ModelKind::Constant,
            Workload::Linear => ModelKind::Linear,
            Workload::Quadratic => ModelKind::Quadratic,
            Workload::Cubic => ModelKind::Cubic,
            Workload::Sort => ModelKind::Linearithmic,
        }
    }

    /// Time this workload with the given settings.
    pub fn measure(self, config: &MeasureConfig, seed: u64) -> Result<MeasurementSeries, ComplexityError> {
        match self {
            Workload::Constant => measure(|_: &u64| 1.0f64, datagen::n, config),
            Workload::Linear => measure(|&n: &u64| sum_range(n * 1000), datagen::n, config),
            Workload::Quadratic => measure(|&n: &u64| pairwise_sum(n), datagen::n, config),
            Workload::Cubic => measure(|&n: &u64| triple_count(n), datagen::n, config),
            Workload::Sort => {
                let mut rng = StdRng::seed_from_u64(seed);
                measure(
                    |data: &Vec<f64>| {
                        let mut v = data.clone();
                        v.sort_by(f64::total_cmp);
                        v
                    },
                    |n| datagen::normal_floats(n * 100, &mut rng),
                    config,
                )
            }
        }
    }
}

fn sum_range(n: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..n {
        acc = acc.wrapping_add(black_box(i));
    }
    acc
}

fn pairwise_sum(n: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..n {
        for j in 0..n {
            acc = acc.wrapping_add(black_box(i + j));
        }
    }
    acc
}

fn triple_count(n: u64) -> u64 {
    let mut acc = 0u64;
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                acc = acc.wrapping_add(black_box(i ^ j ^ k) & 1);
            }
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subjects_compute_expected_values() {
        assert_eq!(sum_range(5), 10);
        assert_eq!(pairwise_sum(3), 18);
        // i^j^k is odd for half of the 2x2x2 grid.
        assert_eq!(triple_count(2), 4);
    }

    #[test]
    fn measuring_a_workload_returns_configured_sizes() {
        let config = MeasureConfig {
            min_n: 1,
            max_n: 4,
            n_measures: 4,
            n_repeats: 1,
            n_timings: 1,
        };
        let series = Workload::Sort.measure(&config, 3).unwrap();
        assert_eq!(series.ns, vec![1, 2, 3, 4]);
        assert_eq!(Workload::Sort.expected(), ModelKind::Linearithmic);
    }
}
