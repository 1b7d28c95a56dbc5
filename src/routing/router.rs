//! Path-to-URL lookup table.
//!
//! # Responsibilities
//! - Fold parsed records into an exact-match table
//! - Answer lookups for a request target
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) lookup via HashMap
//! - Last record wins when a path appears more than once

use std::collections::HashMap;

use crate::mapping::Record;

/// Immutable table from request target to redirect destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    targets: HashMap<String, String>,
}

impl PathMapping {
    /// Build the table from records in input order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        records
            .into_iter()
            .map(|record| (record.path, record.url))
            .collect()
    }

    /// Destination URL for an exact request target.
    pub fn lookup(&self, target: &str) -> Option<&str> {
        self.targets.get(target).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PathMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut targets = HashMap::new();
        for (path, url) in iter {
            // Plain insert: a later duplicate replaces the earlier URL.
            targets.insert(path.into(), url.into());
        }
        Self { targets }
    }
}
