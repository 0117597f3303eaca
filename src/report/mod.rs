//! Reporting: human-readable summaries of a fit selection.

pub mod format;

pub use format::*;
