//! Infrastructure adapters for mailboxes and the ready queue.

pub mod mailbox;
pub mod queue;
pub use mailbox::InMemoryMailbox;
pub use queue::ReadyQueue;
