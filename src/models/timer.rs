/// A recurring grant of one item
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timer {
    /// Resolved item identifier
    pub item: String,
    /// Seconds between grants
    pub frequency: u32,
    /// Unix timestamp the timer was last (re)set
    pub set_at: i64,
}

impl Timer {
    pub fn new(item: String, frequency: u32, set_at: i64) -> Self {
        Self {
            item,
            frequency,
            set_at,
        }
    }

    /// Grants falling in the window `(after, until]`
    ///
    /// A grant lands at every whole multiple of `frequency` after `set_at`.
    pub fn periods_between(&self, after: i64, until: i64) -> u32 {
        if self.frequency == 0 || until <= after {
            return 0;
        }

        let frequency = i64::from(self.frequency);
        let reached = (until - self.set_at).max(0) / frequency;
        let already = (after - self.set_at).max(0) / frequency;

        u32::try_from(reached - already).unwrap_or(u32::MAX)
    }
}
