//! Subject inputs: size-driven data generators and built-in workloads.

pub mod datagen;
pub mod workloads;

pub use workloads::Workload;
