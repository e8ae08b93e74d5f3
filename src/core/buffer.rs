//! Shared item buffer for the producer/consumer demonstration.

use std::collections::VecDeque;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};

/// Ordered item tokens behind a single mutual-exclusion lock.
///
/// No capacity limit is enforced and there is no wait/notify: a consumer that
/// finds the buffer empty simply comes back later. Producers and consumers
/// take the guard from [`BoundedBuffer::lock`] and push or pop through it, so
/// each item operation and its log entry form one critical section.
#[derive(Debug, Default)]
pub struct BoundedBuffer {
    items: Mutex<VecDeque<String>>,
}

impl BoundedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the buffer lock. Keep the guard for one operation only.
    pub fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.items.lock()
    }

    /// Acquire the buffer lock, giving up after `timeout`.
    pub fn try_lock_for(&self, timeout: Duration) -> Option<MutexGuard<'_, VecDeque<String>>> {
        self.items.try_lock_for(timeout)
    }

    /// Copy of the buffered items, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.items.lock().iter().cloned().collect()
    }
}
