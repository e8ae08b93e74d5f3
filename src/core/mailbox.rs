//! Mailbox abstraction for inter-process messages.

use serde::{Deserialize, Serialize};

use crate::core::process::Pid;

/// Message waiting in a destination's mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sending process.
    pub from: Pid,
    /// Message body.
    pub text: String,
}

/// Storage for per-destination FIFO mailboxes.
///
/// All methods take `&self`: backends must tolerate concurrent senders and
/// receivers on the same destination.
pub trait Mailbox: Send + Sync {
    /// Append `message` to the tail of `to`'s mailbox, creating it on first use.
    fn deliver(&self, to: Pid, message: Message);
    /// Remove and return the oldest message for `pid`.
    fn take(&self, pid: Pid) -> Option<Message>;
    /// Messages waiting for `pid`.
    fn pending(&self, pid: Pid) -> usize;
}
