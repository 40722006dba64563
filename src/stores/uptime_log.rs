use dashmap::DashMap;

/// Minutes logged by each player over finished sessions in this run
pub struct UptimeLog {
    minutes: DashMap<String, i64>,
}

impl UptimeLog {
    pub fn new() -> Self {
        Self {
            minutes: DashMap::new(),
        }
    }

    /// Fold a finished session into the player's total, returning the new total
    pub fn record(&self, name: &str, minutes: i64) -> i64 {
        let mut total = self.minutes.entry(name.to_string()).or_insert(0);
        *total += minutes.max(0);
        *total
    }

    /// Historical total, absent until the player's first session ends
    pub fn total(&self, name: &str) -> Option<i64> {
        self.minutes.get(name).map(|entry| *entry.value())
    }

    /// Exact logged name matched case-insensitively
    pub fn find(&self, name: &str) -> Option<String> {
        if self.minutes.contains_key(name) {
            return Some(name.to_string());
        }

        self.minutes
            .iter()
            .find(|entry| entry.key().eq_ignore_ascii_case(name))
            .map(|entry| entry.key().clone())
    }

    pub fn len(&self) -> usize {
        self.minutes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }
}

impl Default for UptimeLog {
    fn default() -> Self {
        Self::new()
    }
}
