//! Append-only event log shared by the scheduler, mailboxes and the
//! producer/consumer demonstration.

use std::fmt;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::util::clock::{format_hms, now_ms};

/// Component that produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    /// Scheduling loop and process lifecycle.
    Scheduler,
    /// Mailbox send/receive.
    Mailbox,
    /// Producer demonstration unit.
    Producer,
    /// Consumer demonstration unit.
    Consumer,
}

/// Timestamped log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Milliseconds since the Unix epoch.
    pub timestamp_ms: u128,
    /// Emitting component.
    pub source: EventSource,
    /// Event text.
    pub message: String,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", format_hms(self.timestamp_ms), self.message)
    }
}

/// Thread-safe, append-only sequence of events.
///
/// Insertion order is chronological order; entries are never reordered or
/// removed.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Mutex<Vec<Event>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event stamped with the current time and mirror it to tracing.
    pub fn record(&self, source: EventSource, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "kernel_sim::events", source = ?source, "{message}");
        // Stamp under the lock so timestamps follow append order.
        let mut events = self.events.lock();
        events.push(Event {
            timestamp_ms: now_ms(),
            source,
            message,
        });
    }

    /// Snapshot of every event in append order.
    pub fn history(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Messages from one component, in append order.
    pub fn messages_from(&self, source: EventSource) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.source == source)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Number of events recorded.
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}
