//! Wall-clock helpers used to stamp log events.

use chrono::{DateTime, Local, Utc};

/// Milliseconds since the Unix epoch.
///
/// A clock set before the epoch reads as zero.
pub fn now_ms() -> u128 {
    u128::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Render an epoch timestamp as `HH:MM:SS` in the local time zone.
///
/// Timestamps outside chrono's representable range render as an empty string.
pub fn format_hms(timestamp_ms: u128) -> String {
    i64::try_from(timestamp_ms)
        .ok()
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| utc.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_default()
}
