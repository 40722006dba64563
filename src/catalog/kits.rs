use serde::Deserialize;
use std::collections::BTreeMap;

/// One line of a kit: a bare item name, or an item with a quantity
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum KitEntry {
    Bare(String),
    Counted(String, u32),
}

impl KitEntry {
    pub fn item(&self) -> &str {
        match self {
            KitEntry::Bare(item) | KitEntry::Counted(item, _) => item,
        }
    }

    pub fn quantity(&self) -> u32 {
        match self {
            KitEntry::Bare(_) => 1,
            KitEntry::Counted(_, quantity) => *quantity,
        }
    }
}

/// Named bundles of item grants, keyed by lowercased label
#[derive(Debug, Default, Clone)]
pub struct KitTable {
    kits: BTreeMap<String, Vec<KitEntry>>,
}

impl KitTable {
    pub fn new(kits: &BTreeMap<String, Vec<KitEntry>>) -> Self {
        Self {
            kits: kits
                .iter()
                .map(|(name, entries)| (name.to_lowercase(), entries.clone()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[KitEntry]> {
        self.kits.get(&name.to_lowercase()).map(Vec::as_slice)
    }

    /// Kit labels in alphabetical order
    pub fn names(&self) -> Vec<&str> {
        self.kits.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.kits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kits.is_empty()
    }
}
