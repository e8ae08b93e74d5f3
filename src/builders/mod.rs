//! Builders to construct a kernel from configuration.

pub mod kernel_builder;

pub use kernel_builder::KernelBuilder;
