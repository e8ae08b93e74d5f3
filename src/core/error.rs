//! Error types for kernel operations.

use thiserror::Error;

use crate::core::process::Pid;

/// Errors produced by kernel components.
///
/// Resource contention and empty mailboxes are not errors; they are ordinary
/// outcomes reported through [`crate::core::Dispatch`] and `Option`.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Configuration rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// No process with this pid exists in the process table.
    #[error("unknown process: {0}")]
    UnknownProcess(Pid),
    /// Every ready process was denied admission in a row.
    #[error("scheduler stalled: {waiting} ready process(es) cannot be admitted")]
    Stalled {
        /// Processes left in the ready queue.
        waiting: usize,
    },
    /// A demonstration unit could not be launched.
    #[error("spawn failed: {0}")]
    Spawn(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
