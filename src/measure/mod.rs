//! Timing harness: produces `(ns, times)` measurement series.

pub mod grid;
pub mod timing;

pub use grid::*;
pub use timing::*;
