//! Configuration models for the simulated kernel.

pub mod kernel;

pub use kernel::{Discipline, KernelConfig, ReorderPolicy};
