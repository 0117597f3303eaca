//! Wall-clock timing of a subject function over increasing input sizes.
//!
//! For each size the input is generated once (not timed). A timed block runs
//! the subject `n_repeats` times back to back; the block is repeated
//! `n_timings` times and the fastest block is kept. Slower blocks are treated
//! as interference from the rest of the system.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, debug_span};

use crate::domain::{MeasureConfig, MeasurementSeries};
use crate::error::ComplexityError;
use crate::measure::grid::linear_sizes;

/// Measure `func` on inputs from `data_generator` at the configured sizes.
///
/// Returns cumulative (not per-call) times in seconds.
pub fn measure<D, R, F, G>(
    mut func: F,
    data_generator: G,
    config: &MeasureConfig,
) -> Result<MeasurementSeries, ComplexityError>
where
    F: FnMut(&D) -> R,
    G: FnMut(u64) -> D,
{
    try_measure(
        |data: &D| Ok::<R, ComplexityError>(func(data)),
        data_generator,
        config,
    )
}

/// Like [`measure`], for a fallible subject.
///
/// The first error returned by `func` aborts the measurement and is
/// propagated unchanged.
pub fn try_measure<D, R, E, F, G>(
    mut func: F,
    mut data_generator: G,
    config: &MeasureConfig,
) -> Result<MeasurementSeries, E>
where
    F: FnMut(&D) -> Result<R, E>,
    G: FnMut(u64) -> D,
    E: From<ComplexityError>,
{
    config.validate()?;
    let ns = linear_sizes(config.min_n, config.max_n, config.n_measures)?;
    let _span = debug_span!("measure", sizes = ns.len(), n_repeats = config.n_repeats, n_timings = config.n_timings).entered();

    let mut times = Vec::with_capacity(ns.len());
    for &n in &ns {
        let data = data_generator(n);

        let mut best = Duration::MAX;
        for _ in 0..config.n_timings {
            let elapsed = time_block(&mut func, &data, config.n_repeats)?;
            best = best.min(elapsed);
        }

        let secs = best.as_secs_f64();
        debug!(n, secs, "measured");
        times.push(secs);
    }

    Ok(MeasurementSeries { ns, times })
}

fn time_block<D, R, E, F>(func: &mut F, data: &D, n_repeats: usize) -> Result<Duration, E>
where
    F: FnMut(&D) -> Result<R, E>,
{
    let start = Instant::now();
    for _ in 0..n_repeats {
        black_box(func(black_box(data))?);
    }
    Ok(start.elapsed())
}
