//! Complexity model implementations.
//!
//! Each growth class is a pair of pure transforms (design row, target) plus a
//! display template, so fitting/selection code can stay generic.

pub mod model;
pub mod registry;

pub use model::*;
pub use registry::*;
