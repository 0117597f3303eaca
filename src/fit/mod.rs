//! Fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit every registry model against one measurement series
//! - select the best model (epsilon-biased, registry order breaks near-ties)
//! - keep failed models in the result with a non-finite residual

pub mod selection;

pub use selection::*;
