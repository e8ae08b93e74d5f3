//! Kernel core: process table, ready queue and the dispatch loop.
//!
//! A [`Kernel`] is one simulation run. It owns every piece of mutable kernel
//! state; nothing lives in globals. The dispatch loop needs `&mut Kernel`, so
//! only one scheduling flow can exist at a time, while mailboxes, the event
//! log and the demonstration buffer are internally synchronized and usable
//! through `&Kernel` from any thread.

use std::sync::Arc;
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{Discipline, KernelConfig, ReorderPolicy};
use crate::core::{
    BoundedBuffer, Event, EventLog, EventSource, KernelError, Mailbox, Message, Pid,
    ProcessRecord, ResourceKind, ResourcePool,
};
use crate::infra::mailbox::InMemoryMailbox;
use crate::infra::queue::memory::index_of;
use crate::infra::queue::ReadyQueue;
use crate::runtime::api::{ProcessSummary, ResourceSnapshot};
use crate::runtime::producer_consumer::{self, DemoHandle, DemoSettings};
use crate::runtime::spawner::{Spawn, ThreadSpawner};

/// Outcome of a single dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dispatch {
    /// Ready queue was empty.
    Idle,
    /// Admission failed; the process went back to the tail of the queue.
    Denied {
        /// Process that was denied.
        pid: Pid,
    },
    /// A slice ran and work remains; the process was requeued.
    Executed {
        /// Process that ran.
        pid: Pid,
        /// Time units consumed by the slice.
        uses: u32,
        /// Time units still owed.
        remaining: u32,
    },
    /// A slice ran and the process terminated.
    Completed {
        /// Process that finished.
        pid: Pid,
        /// Time units consumed by the final slice.
        uses: u32,
    },
}

/// Summary of one [`Kernel::run`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Slices executed.
    pub slices: usize,
    /// Admission denials.
    pub denials: usize,
    /// Pids in the order they terminated.
    pub completed: Vec<Pid>,
    /// Simulated time units consumed.
    pub elapsed_units: u64,
}

/// Simulated kernel with pluggable mailbox storage and unit spawner.
pub struct Kernel<M = InMemoryMailbox, S = ThreadSpawner> {
    config: KernelConfig,
    run_id: Uuid,
    processes: Vec<ProcessRecord>,
    ready: ReadyQueue,
    resources: ResourcePool,
    mailbox: M,
    events: Arc<EventLog>,
    buffer: Arc<BoundedBuffer>,
    spawner: S,
    elapsed_units: u64,
}

impl Kernel {
    /// Create a kernel with in-memory mailboxes and thread-backed units.
    pub fn new(config: KernelConfig) -> Result<Self, KernelError> {
        Self::with_components(config, InMemoryMailbox::new(), ThreadSpawner)
    }
}

impl<M, S> Kernel<M, S>
where
    M: Mailbox,
    S: Spawn,
{
    /// Create a kernel from explicit components.
    pub fn with_components(config: KernelConfig, mailbox: M, spawner: S) -> Result<Self, KernelError> {
        config.validate()?;
        let run_id = Uuid::new_v4();
        info!(
            %run_id,
            discipline = %config.discipline,
            quantum = config.quantum,
            cpu_total = config.cpu_total,
            mem_total_mb = config.mem_total_mb,
            "kernel initialized"
        );
        Ok(Self {
            resources: ResourcePool::new(config.cpu_total, config.mem_total_mb),
            config,
            run_id,
            processes: Vec::new(),
            ready: ReadyQueue::new(),
            mailbox,
            events: Arc::new(EventLog::new()),
            buffer: Arc::new(BoundedBuffer::new()),
            spawner,
            elapsed_units: 0,
        })
    }

    /// Active configuration.
    pub const fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// Active scheduling discipline.
    pub const fn discipline(&self) -> Discipline {
        self.config.discipline
    }

    /// Identifier of this simulation run, recorded on tracing spans.
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Create a ready process and append it to the tail of the ready queue.
    pub fn submit(&mut self, priority: i32, burst: u32) -> Pid {
        let pid = Pid::try_from(self.processes.len() + 1).unwrap_or(Pid::MAX);
        self.processes.push(ProcessRecord::new(pid, priority, burst));
        self.ready.push_back(pid);
        self.events.record(
            EventSource::Scheduler,
            format!("Process {pid} created | Priority: {priority} | Burst: {burst}"),
        );
        pid
    }

    /// Re-sort the ready queue for the active discipline.
    pub fn order(&mut self) {
        self.ready.order(self.config.discipline, &self.processes);
    }

    /// Dispatch the head of the ready queue once: admit, execute one slice and
    /// requeue or terminate. Denied processes go to the tail without advancing
    /// simulated time.
    pub fn step(&mut self) -> Dispatch {
        let Some(pid) = self.ready.pop_front() else {
            return Dispatch::Idle;
        };
        let Some(record) = self.processes.get_mut(index_of(pid)) else {
            warn!(pid, "dropping unknown pid from ready queue");
            return Dispatch::Idle;
        };

        if !self.resources.allocate(&mut record.holdings, ResourceKind::Cpu, 1) {
            self.events.record(
                EventSource::Scheduler,
                format!("Resource unavailable: CPU not free for process {pid}. Reprogrammed."),
            );
            self.ready.push_back(pid);
            return Dispatch::Denied { pid };
        }

        record.mark_running();
        let uses = record.slice_len(self.config.discipline.slice_cap(self.config.quantum));
        self.events.record(
            EventSource::Scheduler,
            format!("Executing process {pid} for {uses} time unit(s)..."),
        );
        let delay = self.config.time_unit() * uses;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        record.consume(uses);
        self.resources.release(&mut record.holdings);
        self.elapsed_units += u64::from(uses);

        if record.is_terminated() {
            self.events.record(
                EventSource::Scheduler,
                format!("Process {pid} finished successfully."),
            );
            Dispatch::Completed { pid, uses }
        } else {
            let remaining = record.remaining();
            self.ready.push_back(pid);
            debug!(pid, remaining, "process requeued");
            Dispatch::Executed { pid, uses, remaining }
        }
    }

    /// Drain the ready queue.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::Stalled`] when every queued process is denied
    /// admission in a row with no slice executed in between. That can only
    /// happen when capacity is held outside the dispatch loop (see
    /// [`Kernel::allocate`]); the processes stay queued.
    pub fn run(&mut self) -> Result<RunReport, KernelError> {
        let span = tracing::info_span!("run", run_id = %self.run_id, discipline = %self.config.discipline);
        let _entered = span.enter();

        let start_units = self.elapsed_units;
        let mut report = RunReport::default();
        let mut consecutive_denials = 0usize;

        self.order();
        while !self.ready.is_empty() {
            match self.step() {
                Dispatch::Idle => {}
                Dispatch::Denied { .. } => {
                    report.denials += 1;
                    consecutive_denials += 1;
                    if consecutive_denials >= self.ready.len() {
                        let waiting = self.ready.len();
                        warn!(waiting, "no ready process can be admitted");
                        return Err(KernelError::Stalled { waiting });
                    }
                }
                Dispatch::Executed { .. } => {
                    report.slices += 1;
                    consecutive_denials = 0;
                }
                Dispatch::Completed { pid, .. } => {
                    report.slices += 1;
                    report.completed.push(pid);
                    consecutive_denials = 0;
                }
            }
            if self.config.reorder == ReorderPolicy::EveryDispatch {
                self.order();
            }
        }

        report.elapsed_units = self.elapsed_units - start_units;
        info!(
            slices = report.slices,
            denials = report.denials,
            completed = report.completed.len(),
            "ready queue drained"
        );
        Ok(report)
    }

    /// Grant `amount` of `kind` to process `pid` outside the dispatch loop.
    pub fn allocate(&mut self, pid: Pid, kind: ResourceKind, amount: u32) -> Result<bool, KernelError> {
        let record = self
            .processes
            .get_mut(index_of(pid))
            .ok_or(KernelError::UnknownProcess(pid))?;
        Ok(self.resources.allocate(&mut record.holdings, kind, amount))
    }

    /// Return every resource held by `pid` to the pool. Idempotent.
    pub fn release(&mut self, pid: Pid) -> Result<(), KernelError> {
        let record = self
            .processes
            .get_mut(index_of(pid))
            .ok_or(KernelError::UnknownProcess(pid))?;
        self.resources.release(&mut record.holdings);
        Ok(())
    }

    /// Send `text` from `from` to `to`'s mailbox.
    pub fn send(&self, from: Pid, to: Pid, text: impl Into<String>) {
        let text = text.into();
        self.events.record(
            EventSource::Mailbox,
            format!("Message sent from PID {from} to PID {to}: '{text}'"),
        );
        self.mailbox.deliver(to, Message { from, text });
    }

    /// Take the oldest message addressed to `pid`.
    pub fn receive(&self, pid: Pid) -> Option<Message> {
        let message = self.mailbox.take(pid);
        match &message {
            Some(m) => self.events.record(
                EventSource::Mailbox,
                format!("PID {pid} received message from PID {}: '{}'", m.from, m.text),
            ),
            None => self
                .events
                .record(EventSource::Mailbox, format!("PID {pid} has no new messages.")),
        }
        message
    }

    /// Messages waiting for `pid`.
    pub fn pending_messages(&self, pid: Pid) -> usize {
        self.mailbox.pending(pid)
    }

    /// Launch the producer/consumer demonstration and return immediately.
    pub fn start_producer_consumer(&self) -> Result<DemoHandle, KernelError> {
        let settings = DemoSettings {
            items: self.config.demo_items,
            pause: self.config.demo_pause(),
        };
        producer_consumer::start(
            &self.spawner,
            Arc::clone(&self.buffer),
            Arc::clone(&self.events),
            settings,
        )
    }

    /// One record by pid.
    pub fn process(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.processes.get(index_of(pid))
    }

    /// Every process in submission order, terminated ones included.
    pub fn list_processes(&self) -> Vec<ProcessSummary> {
        self.processes.iter().map(ProcessSummary::from).collect()
    }

    /// Pids waiting in the ready queue, head first.
    pub fn ready_pids(&self) -> Vec<Pid> {
        self.ready.pids()
    }

    /// Free/total resource counters.
    pub const fn resource_snapshot(&self) -> ResourceSnapshot {
        self.resources.snapshot()
    }

    /// Human-readable resource summary.
    pub fn describe_resources(&self) -> String {
        self.resources.describe()
    }

    /// Every logged event, oldest first.
    pub fn event_history(&self) -> Vec<Event> {
        self.events.history()
    }

    /// Shared event log.
    pub const fn events(&self) -> &Arc<EventLog> {
        &self.events
    }

    /// Simulated time units executed since the kernel was created.
    pub const fn elapsed_units(&self) -> u64 {
        self.elapsed_units
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel(discipline: Discipline) -> Kernel {
        Kernel::new(KernelConfig {
            time_unit_ms: 0,
            ..KernelConfig::new(discipline)
        })
        .unwrap()
    }

    #[test]
    fn test_pids_are_monotonic_from_one() {
        let mut k = kernel(Discipline::Fcfs);
        assert_eq!(k.submit(0, 1), 1);
        assert_eq!(k.submit(0, 1), 2);
        assert_eq!(k.ready_pids(), vec![1, 2]);
    }

    #[test]
    fn test_step_on_empty_queue_is_idle() {
        let mut k = kernel(Discipline::Fcfs);
        assert_eq!(k.step(), Dispatch::Idle);
    }

    #[test]
    fn test_step_round_robin_requeues() {
        let mut k = kernel(Discipline::RoundRobin);
        k.submit(0, 5);
        assert_eq!(
            k.step(),
            Dispatch::Executed {
                pid: 1,
                uses: 2,
                remaining: 3
            }
        );
        assert_eq!(k.ready_pids(), vec![1]);
        assert!(k.process(1).unwrap().holdings().is_empty());
    }

    #[test]
    fn test_zero_burst_terminates_on_first_dispatch() {
        let mut k = kernel(Discipline::Sjf);
        k.submit(0, 0);
        assert_eq!(k.step(), Dispatch::Completed { pid: 1, uses: 0 });
        assert!(k.process(1).unwrap().is_terminated());
    }

    #[test]
    fn test_unknown_pid_resource_calls() {
        let mut k = kernel(Discipline::Fcfs);
        assert!(matches!(
            k.allocate(7, ResourceKind::Cpu, 1),
            Err(KernelError::UnknownProcess(7))
        ));
        assert!(matches!(k.release(0), Err(KernelError::UnknownProcess(0))));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Kernel::new(KernelConfig {
            quantum: 0,
            ..KernelConfig::default()
        });
        assert!(matches!(result, Err(KernelError::InvalidConfiguration(_))));
    }
}
