//! Tokio runtime spawner implementation.

use std::sync::Arc;

use crate::core::KernelError;
use crate::runtime::spawner::Spawn;

/// Tokio-based spawner that runs units on the runtime's blocking pool.
#[derive(Clone)]
pub struct TokioSpawner {
    handle: Arc<tokio::runtime::Handle>,
}

impl TokioSpawner {
    /// Create a `TokioSpawner` from a tokio runtime handle.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self {
            handle: Arc::new(handle),
        }
    }

    /// Create a `TokioSpawner` on the runtime the caller is running in.
    pub fn current() -> Result<Self, KernelError> {
        tokio::runtime::Handle::try_current()
            .map(Self::new)
            .map_err(|e| KernelError::Spawn(e.to_string()))
    }
}

impl Spawn for TokioSpawner {
    fn spawn_unit<F>(&self, name: &str, job: F) -> Result<(), KernelError>
    where
        F: FnOnce() + Send + 'static,
    {
        tracing::debug!(unit = name, "spawning blocking unit on tokio");
        // The unit sleeps between iterations, so it belongs on the blocking pool.
        drop(self.handle.spawn_blocking(job));
        Ok(())
    }
}
