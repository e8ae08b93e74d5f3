//! Kernel configuration: scheduling discipline, quantum and resource sizes.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::KernelError;

/// Scheduling policy used to order the ready queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    /// First come, first served: ascending pid.
    #[default]
    Fcfs,
    /// Shortest job first: ascending remaining work.
    Sjf,
    /// Arrival order with slices capped by the quantum.
    #[serde(alias = "rr")]
    RoundRobin,
    /// Descending priority, stable among equals.
    Priority,
}

impl Discipline {
    /// Maximum slice under this discipline, `None` meaning run to completion.
    pub const fn slice_cap(self, quantum: u32) -> Option<u32> {
        match self {
            Self::RoundRobin => Some(quantum),
            Self::Fcfs | Self::Sjf | Self::Priority => None,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::RoundRobin => "Round Robin",
            Self::Priority => "Priority",
        };
        f.write_str(label)
    }
}

impl FromStr for Discipline {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" => Ok(Self::Sjf),
            "rr" | "round_robin" | "roundrobin" | "round robin" => Ok(Self::RoundRobin),
            "priority" => Ok(Self::Priority),
            other => Err(KernelError::InvalidConfiguration(format!(
                "unknown scheduling discipline `{other}`"
            ))),
        }
    }
}

/// When the ready queue is re-sorted during [`crate::core::Kernel::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorderPolicy {
    /// Sort once before the dispatch loop; requeued processes go to the tail.
    #[default]
    Once,
    /// Sort before every dispatch.
    EveryDispatch,
}

impl FromStr for ReorderPolicy {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "once" => Ok(Self::Once),
            "every_dispatch" | "every-dispatch" => Ok(Self::EveryDispatch),
            other => Err(KernelError::InvalidConfiguration(format!(
                "unknown reorder policy `{other}`"
            ))),
        }
    }
}

/// Kernel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Scheduling discipline.
    pub discipline: Discipline,
    /// Round Robin slice cap in time units.
    pub quantum: u32,
    /// Ready queue re-sort policy.
    pub reorder: ReorderPolicy,
    /// CPU slots in the resource pool.
    pub cpu_total: u32,
    /// Memory in the resource pool, in MB.
    pub mem_total_mb: u32,
    /// Real delay per simulated time unit, in milliseconds.
    pub time_unit_ms: u64,
    /// Items produced (and consume attempts) by the demonstration units.
    pub demo_items: usize,
    /// Pause between demonstration iterations, in milliseconds.
    pub demo_pause_ms: u64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            discipline: Discipline::Fcfs,
            quantum: 2,
            reorder: ReorderPolicy::Once,
            cpu_total: 1,
            mem_total_mb: 4096,
            time_unit_ms: 100,
            demo_items: 3,
            demo_pause_ms: 100,
        }
    }
}

impl KernelConfig {
    /// Default configuration for `discipline`.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            ..Self::default()
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), KernelError> {
        if self.quantum == 0 {
            return Err(KernelError::InvalidConfiguration(
                "quantum must be greater than 0".into(),
            ));
        }
        if self.cpu_total == 0 {
            return Err(KernelError::InvalidConfiguration(
                "cpu_total must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// Delay charged per simulated time unit.
    pub const fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    /// Pause between demonstration iterations.
    pub const fn demo_pause(&self) -> Duration {
        Duration::from_millis(self.demo_pause_ms)
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, KernelError> {
        let cfg: Self = serde_json::from_str(input)
            .map_err(|e| KernelError::InvalidConfiguration(format!("parse error: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Build configuration from `KERNEL_*` environment variables, loading a
    /// `.env` file first if one exists. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, KernelError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, KernelError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = lookup("KERNEL_DISCIPLINE") {
            cfg.discipline = v.parse()?;
        }
        if let Some(v) = lookup("KERNEL_REORDER") {
            cfg.reorder = v.parse()?;
        }
        if let Some(v) = lookup("KERNEL_QUANTUM") {
            cfg.quantum = parse_number("KERNEL_QUANTUM", &v)?;
        }
        if let Some(v) = lookup("KERNEL_CPU_TOTAL") {
            cfg.cpu_total = parse_number("KERNEL_CPU_TOTAL", &v)?;
        }
        if let Some(v) = lookup("KERNEL_MEM_TOTAL_MB") {
            cfg.mem_total_mb = parse_number("KERNEL_MEM_TOTAL_MB", &v)?;
        }
        if let Some(v) = lookup("KERNEL_TIME_UNIT_MS") {
            cfg.time_unit_ms = parse_number("KERNEL_TIME_UNIT_MS", &v)?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T, KernelError> {
    value
        .trim()
        .parse()
        .map_err(|_| KernelError::InvalidConfiguration(format!("{key}: `{value}` is not a valid number")))
}
