//! In-memory mailbox backend.

use std::collections::HashMap;
use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::{Mailbox, Message, Pid};

/// One destination's queue. Both channel ends are kept so the queue outlives
/// any individual sender or receiver.
struct MailboxQueue {
    tx: Sender<Message>,
    rx: Receiver<Message>,
}

impl MailboxQueue {
    fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }
}

/// In-memory mailboxes keyed by destination pid.
///
/// - `RwLock` over the table (read-mostly; written once per new destination)
/// - an unbounded MPMC channel per destination for lock-free push/pop
#[derive(Default)]
pub struct InMemoryMailbox {
    queues: RwLock<HashMap<Pid, Arc<MailboxQueue>>>,
}

impl InMemoryMailbox {
    /// Create an empty mailbox table.
    pub fn new() -> Self {
        Self::default()
    }

    fn queue(&self, pid: Pid) -> Option<Arc<MailboxQueue>> {
        self.queues.read().get(&pid).cloned()
    }

    fn queue_or_create(&self, pid: Pid) -> Arc<MailboxQueue> {
        if let Some(queue) = self.queue(pid) {
            return queue;
        }
        let mut queues = self.queues.write();
        Arc::clone(queues.entry(pid).or_insert_with(|| {
            tracing::debug!(pid, "mailbox created");
            Arc::new(MailboxQueue::new())
        }))
    }

    /// Destinations that have received at least one message.
    pub fn destinations(&self) -> Vec<Pid> {
        let mut pids: Vec<_> = self.queues.read().keys().copied().collect();
        pids.sort_unstable();
        pids
    }
}

impl Mailbox for InMemoryMailbox {
    fn deliver(&self, to: Pid, message: Message) {
        let queue = self.queue_or_create(to);
        // Both ends live in `queue`, so the channel cannot be disconnected.
        let _ = queue.tx.send(message);
    }

    fn take(&self, pid: Pid) -> Option<Message> {
        self.queue(pid).and_then(|queue| queue.rx.try_recv().ok())
    }

    fn pending(&self, pid: Pid) -> usize {
        self.queue(pid).map_or(0, |queue| queue.rx.len())
    }
}
