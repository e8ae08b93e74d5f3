//! # Kernel Sim
//!
//! The control core of an operating-system kernel, simulated in-process.
//!
//! The crate models the part of a kernel that decides who runs next and with
//! what: process control blocks, a ready queue ordered by a configurable
//! scheduling discipline, a CPU/memory pool that admits or denies each
//! dispatch, and a small IPC layer. Front ends (menus, prompts, pretty
//! printing) sit on top of the operation surface exposed by [`core::Kernel`].
//!
//! ## Key Features
//!
//! - **Four disciplines**: FCFS, SJF, Round Robin (quantum-capped slices) and Priority
//! - **Admission control**: all-or-nothing allocation; denied processes are requeued, never dropped
//! - **Mailboxes**: per-process FIFO message queues, safe for concurrent senders and receivers
//! - **Producer/consumer**: two concurrent units sharing a mutex-guarded buffer
//! - **Event log**: append-only, timestamped, mirrored to `tracing`
//!
//! ## Example
//!
//! ```
//! use kernel_sim::builders::KernelBuilder;
//! use kernel_sim::config::Discipline;
//! use std::time::Duration;
//!
//! let mut kernel = KernelBuilder::new()
//!     .discipline(Discipline::Sjf)
//!     .time_unit(Duration::ZERO)
//!     .build()?;
//!
//! kernel.submit(1, 5);
//! kernel.submit(1, 1);
//! kernel.submit(1, 3);
//!
//! let report = kernel.run()?;
//! assert_eq!(report.completed, vec![2, 3, 1]);
//!
//! kernel.send(1, 2, "hello");
//! assert_eq!(kernel.receive(2).map(|m| m.text).as_deref(), Some("hello"));
//! assert!(kernel.receive(2).is_none());
//! # Ok::<(), kernel_sim::core::KernelError>(())
//! ```
//!
//! For complete examples, see:
//! - `tests/scheduling_test.rs` - Discipline and admission behaviour
//! - `tests/ipc_test.rs` - Mailboxes and the producer/consumer demonstration

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core kernel abstractions: processes, resources, scheduling, event log.
pub mod core;
/// Configuration models for disciplines, quantum and resource sizes.
pub mod config;
/// Builders to construct a kernel from configuration.
pub mod builders;
/// Infrastructure adapters for mailboxes and the ready queue.
pub mod infra;
/// Runtime adapters (threads, tokio) and the read-only API views.
pub mod runtime;
/// Shared utilities.
pub mod util;
