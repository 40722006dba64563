use std::time::{SystemTime, UNIX_EPOCH};

/// Server ticks per wall-clock second.
pub const TICKS_PER_SECOND: i64 = 20;

pub fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Whole minutes between two timestamps, floored. Clock skew never yields negative minutes.
pub fn elapsed_minutes(start: i64, end: i64) -> i64 {
    (end - start).max(0) / 60
}

pub fn ticks_since(start: i64, now: i64) -> i64 {
    (now - start).max(0) * TICKS_PER_SECOND
}
