//! Tests for the spawner adapters

use std::time::Duration;

use kernel_sim::runtime::{Spawn, ThreadSpawner};

#[test]
fn test_thread_spawner_runs_unit() {
    let (tx, rx) = crossbeam_channel::bounded(1);
    ThreadSpawner
        .spawn_unit("unit", move || tx.send(7).unwrap())
        .unwrap();
    assert_eq!(rx.recv_timeout(Duration::from_secs(5)).unwrap(), 7);
}

#[cfg(feature = "tokio-runtime")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    use kernel_sim::runtime::TokioSpawner;

    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner
        .spawn_unit("unit", move || {
            tx.send(123).unwrap();
        })
        .unwrap();

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[cfg(feature = "tokio-runtime")]
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_producer_consumer_on_tokio() {
    use kernel_sim::core::{BoundedBuffer, EventLog, EventSource};
    use kernel_sim::runtime::producer_consumer::{self, DemoSettings};
    use kernel_sim::runtime::TokioSpawner;
    use std::sync::Arc;

    let spawner = TokioSpawner::current().unwrap();
    let buffer = Arc::new(BoundedBuffer::new());
    let events = Arc::new(EventLog::new());
    let settings = DemoSettings {
        items: 3,
        pause: Duration::from_millis(1),
    };

    let handle = producer_consumer::start(&spawner, buffer, Arc::clone(&events), settings).unwrap();
    let finished = tokio::task::spawn_blocking(move || handle.wait(Duration::from_secs(10)))
        .await
        .unwrap();
    assert!(finished);
    assert_eq!(events.messages_from(EventSource::Producer).len(), 3);
}

#[test]
fn test_tokio_spawner_requires_runtime() {
    #[cfg(feature = "tokio-runtime")]
    assert!(kernel_sim::runtime::TokioSpawner::current().is_err());
}
