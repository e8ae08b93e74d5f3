//! In-memory ready queue with per-discipline ordering.

use std::cmp::Reverse;
use std::collections::VecDeque;

use crate::config::Discipline;
use crate::core::{Pid, ProcessRecord};

/// Ready queue of pids.
///
/// Ordering is not maintained incrementally: [`ReadyQueue::order`] re-sorts
/// the whole queue from the current process state each time it is called.
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    pids: VecDeque<Pid>,
}

impl ReadyQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append at the tail.
    pub fn push_back(&mut self, pid: Pid) {
        self.pids.push_back(pid);
    }

    /// Remove the head.
    pub fn pop_front(&mut self) -> Option<Pid> {
        self.pids.pop_front()
    }

    /// Queued pids, head first.
    pub fn pids(&self) -> Vec<Pid> {
        self.pids.iter().copied().collect()
    }

    /// Current depth.
    pub fn len(&self) -> usize {
        self.pids.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.pids.is_empty()
    }

    /// Reorder in place for `discipline`.
    ///
    /// `processes` is the process table, where pid `n` lives at index `n - 1`.
    /// The sort is stable, so equal keys keep their current relative order.
    pub fn order(&mut self, discipline: Discipline, processes: &[ProcessRecord]) {
        let record = move |pid: &Pid| processes.get(index_of(*pid));
        let slice = self.pids.make_contiguous();
        match discipline {
            Discipline::Fcfs => slice.sort_by_key(|pid| *pid),
            Discipline::Sjf => slice.sort_by_key(|pid| record(pid).map_or(u32::MAX, ProcessRecord::remaining)),
            Discipline::Priority => {
                slice.sort_by_key(|pid| Reverse(record(pid).map_or(i32::MIN, ProcessRecord::priority)));
            }
            // Arrival order; rotation comes from the quantum, not the sort.
            Discipline::RoundRobin => {}
        }
        tracing::debug!(?discipline, queue = ?self.pids, "ready queue ordered");
    }
}

/// Table index of `pid`.
pub(crate) const fn index_of(pid: Pid) -> usize {
    (pid as usize).wrapping_sub(1)
}
