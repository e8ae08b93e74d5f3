//! Ready queue implementations.

pub mod memory;

pub use memory::ReadyQueue;
