//! Tests for the event log

use chrono::Local;
use kernel_sim::core::{EventLog, EventSource};

#[test]
fn test_event_log_records_in_order() {
    let log = EventLog::new();
    assert!(log.is_empty());

    log.record(EventSource::Scheduler, "Process 1 created");
    log.record(EventSource::Mailbox, "Message sent");

    let events = log.history();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].message, "Process 1 created");
    assert_eq!(events[0].source, EventSource::Scheduler);
    assert_eq!(events[1].source, EventSource::Mailbox);
    assert!(events[0].timestamp_ms > 0);
}

#[test]
fn test_event_display_has_clock_prefix() {
    let log = EventLog::new();
    log.record(EventSource::Consumer, "Consumer processed item-0");

    let line = log.history()[0].to_string();
    // "[HH:MM:SS] " prefix
    assert_eq!(&line[0..1], "[");
    assert_eq!(&line[9..11], "] ");
    assert!(line.ends_with("Consumer processed item-0"));
}

#[test]
fn test_event_display_uses_local_time() {
    let log = EventLog::new();
    let before = Local::now().format("%H:%M:%S").to_string();
    log.record(EventSource::Scheduler, "x");
    let after = Local::now().format("%H:%M:%S").to_string();

    let line = log.history()[0].to_string();
    let stamp = &line[1..9];
    assert!(
        (before.as_str() <= stamp && stamp <= after.as_str()) || before > after,
        "{stamp} outside [{before}, {after}]"
    );
}

#[test]
fn test_event_serializes() {
    let log = EventLog::new();
    log.record(EventSource::Producer, "Producer generated item-0");
    let json = serde_json::to_string(&log.history()).unwrap();
    assert!(json.contains("\"source\":\"producer\""));
}
