//! Measure-then-fit composition.

use crate::domain::{MeasureConfig, ModelKind};
use crate::error::ComplexityError;
use crate::fit::{FitSelection, fit_and_select};
use crate::measure::{measure, try_measure};

/// Time `func` over the configured sizes and select the best-fitting model.
pub fn estimate<D, R, F, G>(
    func: F,
    data_generator: G,
    config: &MeasureConfig,
    registry: &[ModelKind],
    return_raw_data: bool,
) -> Result<FitSelection, ComplexityError>
where
    F: FnMut(&D) -> R,
    G: FnMut(u64) -> D,
{
    let series = measure(func, data_generator, config)?;
    fit_and_select(&series, registry, return_raw_data)
}

/// Like [`estimate`], for a fallible subject. Subject errors propagate unchanged.
pub fn try_estimate<D, R, E, F, G>(
    func: F,
    data_generator: G,
    config: &MeasureConfig,
    registry: &[ModelKind],
    return_raw_data: bool,
) -> Result<FitSelection, E>
where
    F: FnMut(&D) -> Result<R, E>,
    G: FnMut(u64) -> D,
    E: From<ComplexityError>,
{
    let series = try_measure(func, data_generator, config)?;
    Ok(fit_and_select(&series, registry, return_raw_data)?)
}
