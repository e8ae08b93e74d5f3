//! Runtime adapters and the API surface handed to front ends.

pub mod api;
pub mod producer_consumer;
pub mod spawner;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_spawner;

pub use api::{ProcessSummary, ResourceSnapshot};
pub use producer_consumer::{DemoHandle, DemoSettings};
pub use spawner::{Spawn, ThreadSpawner};
#[cfg(feature = "tokio-runtime")]
pub use tokio_spawner::TokioSpawner;
