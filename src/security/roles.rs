use dashmap::DashSet;

/// Privilege level required by, or held for, a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Role {
    Player,
    HalfOperator,
    Operator,
}

/// A set of player names holding one role
///
/// Names are case-normalized, so `Steve` and `steve` are the same member.
#[derive(Debug, Default)]
pub struct RoleSet {
    members: DashSet<String>,
}

impl RoleSet {
    pub fn new() -> Self {
        Self {
            members: DashSet::new(),
        }
    }

    pub fn with_members(names: &[String]) -> Self {
        let set = Self::new();

        for name in names {
            set.grant(name);
        }

        set
    }

    /// Add a member. Returns false if they already held the role.
    pub fn grant(&self, name: &str) -> bool {
        self.members.insert(name.to_lowercase())
    }

    /// Remove a member. Returns false if they did not hold the role.
    pub fn revoke(&self, name: &str) -> bool {
        self.members.remove(&name.to_lowercase()).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(&name.to_lowercase())
    }

    /// Members in alphabetical order
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.members.iter().map(|entry| entry.key().clone()).collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
