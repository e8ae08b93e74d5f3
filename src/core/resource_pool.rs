//! Resource pool with all-or-nothing admission accounting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::process::Holdings;
use crate::runtime::api::ResourceSnapshot;

/// Kinds of resource tracked by the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// CPU execution slots.
    Cpu,
    /// Memory, in MB.
    Memory,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpu => write!(f, "CPU"),
            Self::Memory => write!(f, "Memory"),
        }
    }
}

/// Free/total counters for CPU slots and memory.
///
/// Every unit missing from `*_free` is recorded in some process's
/// [`Holdings`]; allocation and release move units between the two as a pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePool {
    cpu_total: u32,
    cpu_free: u32,
    mem_total: u32,
    mem_free: u32,
}

impl ResourcePool {
    /// Create a pool with everything free.
    pub const fn new(cpu_total: u32, mem_total: u32) -> Self {
        Self {
            cpu_total,
            cpu_free: cpu_total,
            mem_total,
            mem_free: mem_total,
        }
    }

    /// Units currently free of `kind`.
    pub const fn available(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Cpu => self.cpu_free,
            ResourceKind::Memory => self.mem_free,
        }
    }

    /// Capacity of `kind`.
    pub const fn total(&self, kind: ResourceKind) -> u32 {
        match kind {
            ResourceKind::Cpu => self.cpu_total,
            ResourceKind::Memory => self.mem_total,
        }
    }

    fn free_mut(&mut self, kind: ResourceKind) -> &mut u32 {
        match kind {
            ResourceKind::Cpu => &mut self.cpu_free,
            ResourceKind::Memory => &mut self.mem_free,
        }
    }

    /// Grant `amount` of `kind` to `holdings` if that much is free.
    ///
    /// Returns `false` and leaves both sides untouched otherwise; there is no
    /// partial allocation.
    pub fn allocate(&mut self, holdings: &mut Holdings, kind: ResourceKind, amount: u32) -> bool {
        let free = self.free_mut(kind);
        if amount > *free {
            tracing::debug!(%kind, amount, free = *free, "allocation denied");
            return false;
        }
        *free -= amount;
        holdings.add(kind, amount);
        tracing::debug!(%kind, amount, free = *free, "allocation granted");
        true
    }

    /// Return everything in `holdings` to the pool and zero it.
    ///
    /// Releasing empty holdings is a no-op.
    pub fn release(&mut self, holdings: &mut Holdings) {
        if holdings.is_empty() {
            return;
        }
        self.cpu_free = Self::give_back(self.cpu_free, holdings.cpu, self.cpu_total, ResourceKind::Cpu);
        self.mem_free =
            Self::give_back(self.mem_free, holdings.memory, self.mem_total, ResourceKind::Memory);
        *holdings = Holdings::default();
        tracing::debug!(cpu_free = self.cpu_free, mem_free = self.mem_free, "holdings released");
    }

    fn give_back(free: u32, held: u32, total: u32, kind: ResourceKind) -> u32 {
        let restored = free.saturating_add(held);
        if restored > total {
            tracing::warn!(%kind, restored, total, "release exceeds capacity; clamping");
            return total;
        }
        restored
    }

    /// Human-readable free/total summary.
    pub fn describe(&self) -> String {
        format!(
            "CPU available: {}/{} | Memory available: {}/{} MB",
            self.cpu_free, self.cpu_total, self.mem_free, self.mem_total
        )
    }

    /// Plain-data view of the counters.
    pub const fn snapshot(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            cpu_free: self.cpu_free,
            cpu_total: self.cpu_total,
            mem_free: self.mem_free,
            mem_total: self.mem_total,
        }
    }
}

impl Default for ResourcePool {
    fn default() -> Self {
        Self::new(1, 4096)
    }
}
