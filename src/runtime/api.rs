//! Read-only views handed to front ends.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Holdings, Pid, ProcessRecord, ProcessStatus};

/// Summary of one process for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Process identifier.
    pub pid: Pid,
    /// Lifecycle status.
    pub status: ProcessStatus,
    /// Scheduling priority.
    pub priority: i32,
    /// CPU time units still owed.
    pub remaining: u32,
    /// Resources held right now.
    pub holdings: Holdings,
}

impl From<&ProcessRecord> for ProcessSummary {
    fn from(record: &ProcessRecord) -> Self {
        Self {
            pid: record.pid(),
            status: record.status(),
            priority: record.priority(),
            remaining: record.remaining(),
            holdings: record.holdings(),
        }
    }
}

impl fmt::Display for ProcessSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[PID {}] Status: {:<12} Priority: {:<3} Remaining: {:<3} Resources: {}",
            self.pid, self.status, self.priority, self.remaining, self.holdings
        )
    }
}

/// Free/total resource counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    /// Free CPU slots.
    pub cpu_free: u32,
    /// CPU capacity.
    pub cpu_total: u32,
    /// Free memory, MB.
    pub mem_free: u32,
    /// Memory capacity, MB.
    pub mem_total: u32,
}
