//! Fluent construction of [`Kernel`] values.

use std::time::Duration;

use crate::config::{Discipline, KernelConfig, ReorderPolicy};
use crate::core::{Kernel, KernelError, Mailbox};
use crate::runtime::spawner::Spawn;

/// Builder over [`KernelConfig`] with pluggable mailbox and spawner.
#[derive(Debug, Clone)]
pub struct KernelBuilder {
    config: KernelConfig,
}

impl KernelBuilder {
    /// Start from default configuration.
    pub fn new() -> Self {
        Self {
            config: KernelConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub const fn from_config(config: KernelConfig) -> Self {
        Self { config }
    }

    /// Configuration accumulated so far.
    pub const fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Scheduling discipline.
    #[must_use]
    pub const fn discipline(mut self, discipline: Discipline) -> Self {
        self.config.discipline = discipline;
        self
    }

    /// Round Robin quantum.
    #[must_use]
    pub const fn quantum(mut self, quantum: u32) -> Self {
        self.config.quantum = quantum;
        self
    }

    /// Ready queue re-sort policy.
    #[must_use]
    pub const fn reorder(mut self, reorder: ReorderPolicy) -> Self {
        self.config.reorder = reorder;
        self
    }

    /// CPU slots and memory (MB) in the resource pool.
    #[must_use]
    pub const fn resources(mut self, cpu_total: u32, mem_total_mb: u32) -> Self {
        self.config.cpu_total = cpu_total;
        self.config.mem_total_mb = mem_total_mb;
        self
    }

    /// Real delay per simulated time unit. Sub-millisecond parts are dropped.
    #[must_use]
    pub fn time_unit(mut self, unit: Duration) -> Self {
        self.config.time_unit_ms = u64::try_from(unit.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Iterations and pause for the producer/consumer demonstration.
    #[must_use]
    pub fn demo(mut self, items: usize, pause: Duration) -> Self {
        self.config.demo_items = items;
        self.config.demo_pause_ms = u64::try_from(pause.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Build with in-memory mailboxes and thread-backed demonstration units.
    pub fn build(self) -> Result<Kernel, KernelError> {
        Kernel::new(self.config)
    }

    /// Build with explicit mailbox storage and spawner.
    pub fn build_with<M, S>(self, mailbox: M, spawner: S) -> Result<Kernel<M, S>, KernelError>
    where
        M: Mailbox,
        S: Spawn,
    {
        Kernel::with_components(self.config, mailbox, spawner)
    }
}

impl Default for KernelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
