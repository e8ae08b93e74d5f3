//! Process control block model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::resource_pool::ResourceKind;

/// Process identifier. Assigned monotonically starting at 1.
pub type Pid = u32;

/// Lifecycle status of a simulated process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessStatus {
    /// Waiting in the ready queue.
    Ready,
    /// Admitted and executing a slice.
    Running,
    /// All work done. Terminal.
    Terminated,
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Ready => "Ready",
            Self::Running => "Running",
            Self::Terminated => "Terminated",
        };
        f.pad(label)
    }
}

/// Resources currently held by one process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    /// CPU slots held.
    pub cpu: u32,
    /// Memory held, in MB.
    pub memory: u32,
}

impl Holdings {
    /// Amount held of one resource kind.
    pub const fn get(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Cpu => self.cpu,
            ResourceKind::Memory => self.memory,
        }
    }

    pub(crate) fn add(&mut self, kind: ResourceKind, amount: u32) {
        match kind {
            ResourceKind::Cpu => self.cpu += amount,
            ResourceKind::Memory => self.memory += amount,
        }
    }

    /// True when nothing is held.
    pub const fn is_empty(&self) -> bool {
        self.cpu == 0 && self.memory == 0
    }
}

impl fmt::Display for Holdings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{CPU: {}, Memory: {}}}", self.cpu, self.memory)
    }
}

/// Process control block.
///
/// `remaining` only ever decreases, and only through [`ProcessRecord::consume`],
/// so `0 <= remaining <= burst` holds for the life of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRecord {
    pid: Pid,
    priority: i32,
    burst: u32,
    remaining: u32,
    status: ProcessStatus,
    pub(crate) holdings: Holdings,
}

impl ProcessRecord {
    /// Create a ready process with its full burst outstanding.
    pub const fn new(pid: Pid, priority: i32, burst: u32) -> Self {
        Self {
            pid,
            priority,
            burst,
            remaining: burst,
            status: ProcessStatus::Ready,
            holdings: Holdings { cpu: 0, memory: 0 },
        }
    }

    /// Process identifier.
    pub const fn pid(&self) -> Pid {
        self.pid
    }

    /// Scheduling priority; larger is more urgent.
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// CPU time units requested at creation.
    pub const fn burst(&self) -> u32 {
        self.burst
    }

    /// CPU time units still owed.
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Current lifecycle status.
    pub const fn status(&self) -> ProcessStatus {
        self.status
    }

    /// Resources currently held.
    pub const fn holdings(&self) -> Holdings {
        self.holdings
    }

    /// True once the process reached `Terminated`.
    pub const fn is_terminated(&self) -> bool {
        matches!(self.status, ProcessStatus::Terminated)
    }

    /// Length of the next slice: capped by `quantum` when one applies,
    /// otherwise run to completion.
    pub fn slice_len(&self, quantum: Option<u32>) -> u32 {
        quantum.map_or(self.remaining, |q| self.remaining.min(q))
    }

    pub(crate) fn mark_running(&mut self) {
        debug_assert!(!self.is_terminated(), "terminated process dispatched");
        self.status = ProcessStatus::Running;
    }

    /// Charge `units` of execution and settle the status after the slice.
    pub(crate) fn consume(&mut self, units: u32) {
        self.remaining = self.remaining.saturating_sub(units);
        self.status = if self.remaining == 0 {
            ProcessStatus::Terminated
        } else {
            ProcessStatus::Ready
        };
    }
}
