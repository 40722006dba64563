use crate::models::timer::Timer;
use dashmap::DashMap;
use std::collections::BTreeMap;

/// Per-player recurring item grants, keyed by item identifier
pub struct TimerStore {
    timers: DashMap<String, BTreeMap<String, Timer>>,
}

impl TimerStore {
    pub fn new() -> Self {
        Self {
            timers: DashMap::new(),
        }
    }

    /// Set or replace the timer for `timer.item`, returning the replaced one
    pub fn set(&self, user: &str, timer: Timer) -> Option<Timer> {
        self.timers
            .entry(user.to_string())
            .or_default()
            .insert(timer.item.clone(), timer)
    }

    /// Remove a timer. Absent timers are not an error.
    pub fn remove(&self, user: &str, item: &str) -> Option<Timer> {
        self.timers.get_mut(user).and_then(|mut table| table.remove(item))
    }

    /// A player's timers ordered by item identifier
    pub fn list(&self, user: &str) -> Vec<Timer> {
        self.timers
            .get(user)
            .map(|table| table.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Every (player, timer, grants) triple with grants falling in `(after, until]`
    pub fn due(&self, after: i64, until: i64) -> Vec<(String, Timer, u32)> {
        let mut due: Vec<(String, Timer, u32)> = self
            .timers
            .iter()
            .flat_map(|entry| {
                let user = entry.key().clone();
                entry
                    .value()
                    .values()
                    .filter_map(|timer| {
                        let periods = timer.periods_between(after, until);
                        (periods > 0).then(|| (user.clone(), timer.clone(), periods))
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        due.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.item.cmp(&b.1.item)));
        due
    }

    /// Total timers across all players
    pub fn total(&self) -> usize {
        self.timers.iter().map(|entry| entry.value().len()).sum()
    }
}

impl Default for TimerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_frequency() {
        let store = TimerStore::new();

        assert!(store.set("Steve", Timer::new("264".to_string(), 30, 1000)).is_none());
        let old = store.set("Steve", Timer::new("264".to_string(), 60, 1010)).unwrap();
        assert_eq!(old.frequency, 30);

        let timers = store.list("Steve");
        assert_eq!(timers.len(), 1);
        assert_eq!(timers[0].frequency, 60);
    }

    #[test]
    fn test_remove_absent_is_none() {
        let store = TimerStore::new();
        assert!(store.remove("Steve", "264").is_none());

        store.set("Steve", Timer::new("264".to_string(), 30, 1000));
        assert!(store.remove("Steve", "1").is_none());
        assert!(store.remove("Steve", "264").is_some());
        assert!(store.list("Steve").is_empty());
    }

    #[test]
    fn test_list_is_per_user() {
        let store = TimerStore::new();
        store.set("Steve", Timer::new("264".to_string(), 30, 1000));
        store.set("Alex", Timer::new("1".to_string(), 10, 1000));

        assert_eq!(store.list("Steve").len(), 1);
        assert_eq!(store.list("Alex")[0].item, "1");
        assert!(store.list("Nobody").is_empty());
        assert_eq!(store.total(), 2);
    }

    #[test]
    fn test_due() {
        let store = TimerStore::new();
        store.set("Steve", Timer::new("264".to_string(), 30, 1000));
        store.set("Steve", Timer::new("1".to_string(), 10, 1000));
        store.set("Alex", Timer::new("4".to_string(), 15, 1000));

        let due = store.due(1029, 1030);
        let triples: Vec<(&str, &str, u32)> = due
            .iter()
            .map(|(u, t, n)| (u.as_str(), t.item.as_str(), *n))
            .collect();
        assert_eq!(triples, vec![("Alex", "4", 1), ("Steve", "1", 1), ("Steve", "264", 1)]);

        assert_eq!(store.due(1009, 1010).len(), 1);
        assert!(store.due(1000, 1001).is_empty());
    }

    #[test]
    fn test_due_over_a_gap() {
        let store = TimerStore::new();
        store.set("Steve", Timer::new("1".to_string(), 10, 1000));

        let due = store.due(1005, 1035);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].2, 3);
    }
}
