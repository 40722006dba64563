use crate::models::shortcut::SavedCommand;
use dashmap::DashMap;
use std::collections::BTreeMap;

/// Per-player saved command sequences, keyed by label
pub struct ShortcutStore {
    shortcuts: DashMap<String, BTreeMap<String, Vec<SavedCommand>>>,
}

impl ShortcutStore {
    pub fn new() -> Self {
        Self {
            shortcuts: DashMap::new(),
        }
    }

    /// Save a shortcut, returning true if it replaced an earlier definition
    pub fn save(&self, user: &str, label: &str, commands: Vec<SavedCommand>) -> bool {
        self.shortcuts
            .entry(user.to_string())
            .or_default()
            .insert(label.to_string(), commands)
            .is_some()
    }

    pub fn get(&self, user: &str, label: &str) -> Option<Vec<SavedCommand>> {
        self.shortcuts
            .get(user)
            .and_then(|table| table.get(label).cloned())
    }

    /// A player's labels in alphabetical order
    pub fn labels(&self, user: &str) -> Vec<String> {
        self.shortcuts
            .get(user)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for ShortcutStore {
    fn default() -> Self {
        Self::new()
    }
}
