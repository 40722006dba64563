use dashmap::DashMap;

/// Currently connected players and when their sessions started
pub struct Roster {
    sessions: DashMap<String, i64>,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Record a connection. A duplicate join keeps the original start time.
    pub fn connect(&self, name: &str, now: i64) {
        self.sessions.entry(name.to_string()).or_insert(now);
    }

    /// Drop a connection, returning when its session started
    pub fn disconnect(&self, name: &str) -> Option<i64> {
        self.sessions.remove(name).map(|(_, started)| started)
    }

    pub fn session_start(&self, name: &str) -> Option<i64> {
        self.sessions.get(name).map(|entry| *entry.value())
    }

    pub fn is_connected(&self, name: &str) -> bool {
        self.sessions.contains_key(name)
    }

    /// Exact name of a connected player matched case-insensitively
    pub fn find(&self, name: &str) -> Option<String> {
        if self.sessions.contains_key(name) {
            return Some(name.to_string());
        }

        self.sessions
            .iter()
            .find(|entry| entry.key().eq_ignore_ascii_case(name))
            .map(|entry| entry.key().clone())
    }

    /// Connected names in alphabetical order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .sessions
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
