//! Producer/consumer demonstration over the shared [`BoundedBuffer`].
//!
//! Two units run concurrently with each other and with the caller. Each
//! iteration takes the buffer lock for exactly one operation plus its log
//! entry, then pauses with the lock released. The consumer never waits for
//! items: an empty buffer just means a skipped cycle.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

use crate::core::{BoundedBuffer, EventLog, EventSource, KernelError};
use crate::runtime::spawner::Spawn;

/// Iteration count and pacing for both units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSettings {
    /// Items produced, and consume attempts made.
    pub items: usize,
    /// Pause after each iteration, taken outside the lock.
    pub pause: Duration,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            items: 3,
            pause: Duration::from_millis(100),
        }
    }
}

/// Count of units still running, with a condvar signalled as each exits.
struct Completion {
    running: Mutex<usize>,
    cvar: Condvar,
}

/// Marks one unit finished when dropped, so a panicking unit still reports.
struct UnitGuard(Arc<Completion>);

impl Drop for UnitGuard {
    fn drop(&mut self) {
        let mut running = self.0.running.lock();
        *running = running.saturating_sub(1);
        self.0.cvar.notify_all();
    }
}

/// Handle to a launched demonstration.
pub struct DemoHandle {
    buffer: Arc<BoundedBuffer>,
    completion: Arc<Completion>,
}

impl DemoHandle {
    /// Shared buffer the units operate on.
    pub const fn buffer(&self) -> &Arc<BoundedBuffer> {
        &self.buffer
    }

    /// True once both units have exited.
    pub fn is_finished(&self) -> bool {
        *self.completion.running.lock() == 0
    }

    /// Block until both units exit or `timeout` elapses. Returns `true` if
    /// they finished.
    pub fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut running = self.completion.running.lock();
        while *running > 0 {
            if self.completion.cvar.wait_until(&mut running, deadline).timed_out() {
                return *running == 0;
            }
        }
        true
    }
}

/// Launch the producer and consumer units. Does not wait for them.
pub fn start<S: Spawn>(
    spawner: &S,
    buffer: Arc<BoundedBuffer>,
    events: Arc<EventLog>,
    settings: DemoSettings,
) -> Result<DemoHandle, KernelError> {
    let completion = Arc::new(Completion {
        running: Mutex::new(2),
        cvar: Condvar::new(),
    });

    let producer_guard = UnitGuard(Arc::clone(&completion));
    let producer_buffer = Arc::clone(&buffer);
    let producer_events = Arc::clone(&events);
    spawner.spawn_unit("demo-producer", move || {
        let _guard = producer_guard;
        produce(&producer_buffer, &producer_events, settings);
    })?;

    let consumer_guard = UnitGuard(Arc::clone(&completion));
    let consumer_buffer = Arc::clone(&buffer);
    spawner.spawn_unit("demo-consumer", move || {
        let _guard = consumer_guard;
        consume(&consumer_buffer, &events, settings);
    })?;

    tracing::info!(items = settings.items, "producer/consumer started");
    Ok(DemoHandle { buffer, completion })
}

fn produce(buffer: &BoundedBuffer, events: &EventLog, settings: DemoSettings) {
    for i in 0..settings.items {
        {
            let mut items = buffer.lock();
            let item = format!("item-{i}");
            events.record(EventSource::Producer, format!("Producer generated {item}"));
            items.push_back(item);
        }
        thread::sleep(settings.pause);
    }
}

fn consume(buffer: &BoundedBuffer, events: &EventLog, settings: DemoSettings) {
    for _ in 0..settings.items {
        {
            let mut items = buffer.lock();
            if let Some(item) = items.pop_front() {
                events.record(EventSource::Consumer, format!("Consumer processed {item}"));
            }
        }
        thread::sleep(settings.pause);
    }
}
