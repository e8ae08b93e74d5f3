//! Core kernel abstractions: process model, resource accounting, scheduling.

pub mod buffer;
pub mod error;
pub mod event_log;
pub mod mailbox;
pub mod process;
pub mod resource_pool;
pub mod scheduler;

pub use buffer::BoundedBuffer;
pub use error::{AppResult, KernelError};
pub use event_log::{Event, EventLog, EventSource};
pub use mailbox::{Mailbox, Message};
pub use process::{Holdings, Pid, ProcessRecord, ProcessStatus};
pub use resource_pool::{ResourceKind, ResourcePool};
pub use scheduler::{Dispatch, Kernel, RunReport};
