//! Spawning seam for independently scheduled units of work.

use std::thread;

use crate::core::KernelError;

/// Abstraction for launching a blocking unit of work off the caller's thread.
pub trait Spawn {
    /// Launch `job` under `name`. Returns once the unit is scheduled, not when
    /// it finishes.
    fn spawn_unit<F>(&self, name: &str, job: F) -> Result<(), KernelError>
    where
        F: FnOnce() + Send + 'static;
}

/// Spawner backed by dedicated, detached OS threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl Spawn for ThreadSpawner {
    fn spawn_unit<F>(&self, name: &str, job: F) -> Result<(), KernelError>
    where
        F: FnOnce() + Send + 'static,
    {
        thread::Builder::new()
            .name(name.to_string())
            .spawn(job)
            .map(drop)
            .map_err(|e| KernelError::Spawn(format!("{name}: {e}")))
    }
}
