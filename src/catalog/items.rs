use crate::core::error::ResolveError;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Immutable item catalog with a first-character bucket index
///
/// Canonical names are stored lowercased. Buckets are ordered sets so that
/// approximate matching never depends on hash iteration order.
#[derive(Debug, Default)]
pub struct Catalog {
    items: BTreeMap<String, String>,
    buckets: BTreeMap<char, BTreeSet<String>>,
    names_by_id: HashMap<String, String>,
}

impl Catalog {
    pub fn new<I, N, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        let mut catalog = Self::default();

        for (name, id) in entries {
            let name = name.as_ref().trim().to_lowercase();
            let Some(first) = name.chars().next() else {
                continue;
            };
            let id = id.into();

            catalog.buckets.entry(first).or_default().insert(name.clone());
            catalog.names_by_id.entry(id.clone()).or_insert_with(|| name.clone());
            catalog.items.insert(name, id);
        }

        catalog
    }

    /// Resolve user input to an item identifier
    ///
    /// Integers pass through untouched. Anything else must be an exact
    /// canonical name or contain/be contained by one from the same bucket;
    /// the closest length wins, then the shorter name, then the
    /// alphabetically first.
    pub fn resolve(&self, raw: &str) -> Result<String, ResolveError> {
        if raw.parse::<i64>().is_ok() {
            return Ok(raw.to_string());
        }

        let query = raw.to_lowercase();
        let not_found = || ResolveError::NotFound(raw.to_string());

        let first = query.chars().next().ok_or_else(not_found)?;
        let bucket = self.buckets.get(&first).ok_or_else(not_found)?;

        if let Some(id) = self.items.get(&query) {
            return Ok(id.clone());
        }

        let query_len = query.chars().count();
        bucket
            .iter()
            .filter(|name| {
                let len = name.chars().count();
                if len > query_len {
                    name.contains(query.as_str())
                } else {
                    query.contains(name.as_str())
                }
            })
            .min_by_key(|name| {
                let len = name.chars().count();
                (len.abs_diff(query_len), len, name.as_str())
            })
            .and_then(|name| self.items.get(name))
            .cloned()
            .ok_or_else(not_found)
    }

    /// Canonical name for an identifier, if the catalog knows it
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.names_by_id.get(id).map(String::as_str)
    }

    /// Number of distinct first characters
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
