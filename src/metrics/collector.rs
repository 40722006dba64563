use std::sync::atomic::{AtomicU64, Ordering};

pub struct Metrics {
    pub commands_handled: AtomicU64,
    pub commands_failed: AtomicU64,
    pub console_lines: AtomicU64,
    pub timer_grants: AtomicU64,
    pub start_time: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSnapshot {
    pub commands_handled: u64,
    pub commands_failed: u64,
    pub failure_rate: f64,
    pub console_lines: u64,
    pub timer_grants: u64,
    pub uptime_seconds: i64,
}

impl Metrics {
    pub fn new(start_time: i64) -> Self {
        Self {
            commands_handled: AtomicU64::new(0),
            commands_failed: AtomicU64::new(0),
            console_lines: AtomicU64::new(0),
            timer_grants: AtomicU64::new(0),
            start_time,
        }
    }

    pub fn increment_handled(&self) {
        self.commands_handled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_failed(&self) {
        self.commands_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_console_lines(&self, count: usize) {
        self.console_lines.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn add_timer_grants(&self, count: usize) {
        self.timer_grants.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self, now: i64) -> MetricsSnapshot {
        let handled = self.commands_handled.load(Ordering::Relaxed);
        let failed = self.commands_failed.load(Ordering::Relaxed);

        let failure_rate = if handled > 0 {
            (failed as f64 / handled as f64) * 100.0
        } else {
            0.0
        };

        MetricsSnapshot {
            commands_handled: handled,
            commands_failed: failed,
            failure_rate,
            console_lines: self.console_lines.load(Ordering::Relaxed),
            timer_grants: self.timer_grants.load(Ordering::Relaxed),
            uptime_seconds: (now - self.start_time).max(0),
        }
    }
}
