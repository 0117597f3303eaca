//! Input/output helpers.
//!
//! - measurement series JSON read/write (`measurements`)
//! - selection result export (`selection`)

pub mod measurements;
pub mod selection;

pub use measurements::*;
pub use selection::*;
