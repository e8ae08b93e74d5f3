//! Tests for utility functions

use chrono::Local;
use kernel_sim::util::{format_hms, init_tracing, now_ms};

#[test]
fn test_now_ms_advances() {
    let a = now_ms();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let b = now_ms();
    assert!(b >= a);
}

#[test]
fn test_format_hms_matches_local_wall_clock() {
    let before = Local::now();
    let rendered = format_hms(now_ms());
    let after = Local::now();

    assert_eq!(rendered.len(), 8);
    // A second boundary may fall between the two readings.
    let candidates = [
        before.format("%H:%M:%S").to_string(),
        after.format("%H:%M:%S").to_string(),
    ];
    assert!(candidates.contains(&rendered), "{rendered} not in {candidates:?}");
}

#[test]
fn test_init_tracing_is_repeatable() {
    init_tracing();
    init_tracing();
}
