/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Per-category counters.
//!
//! A [`CounterTable`] maps `"39=<code>"` keys to counts. The key set is
//! fixed when the table is built; scanning only ever increments existing
//! entries. Iteration follows construction order so the report lists
//! categories in the order the caller asked for them.
//!
//! Lookups go through a [`HashMap`] index into the ordered entry list.

use std::collections::HashMap;

use crate::error::ScanError;

/// Ordered `"tag=value"` → count table with a frozen key set.
#[derive(Debug, Clone, Default)]
pub struct CounterTable {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl CounterTable {
    /// Build a table with one zero entry per key.
    ///
    /// Duplicate keys collapse onto their first occurrence.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut table = Self::default();
        for key in keys {
            let key = key.into();
            if table.index.contains_key(&key) {
                continue;
            }
            table.index.insert(key.clone(), table.entries.len());
            table.entries.push((key, 0));
        }
        table
    }

    /// Current count for `key`, or `None` if `key` is not tracked.
    #[inline]
    pub fn get(&self, key: &str) -> Option<u64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    /// Whether `key` is one of the tracked categories.
    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Add one to `key`. Returns `false` (and changes nothing) if `key` is
    /// not tracked.
    #[inline]
    pub fn increment(&mut self, key: &str) -> bool {
        match self.index.get(key) {
            Some(&i) => {
                self.entries[i].1 += 1;
                true
            }
            None => false,
        }
    }

    /// Number of tracked keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// `(key, count)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.entries.iter().map(entry_ref)
    }

    /// Owned `(key, count)` rows in construction order.
    pub fn to_rows(&self) -> Vec<(String, u64)> {
        self.entries.clone()
    }

    /// Whether both tables track the same keys in the same order.
    pub fn same_keys(&self, other: &CounterTable) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((a, _), (b, _))| a == b)
    }

    /// Add `other`'s counts into `self`.
    ///
    /// Used to combine per-file partial tables. Both tables must come from
    /// the same category list.
    pub fn merge(&mut self, other: &CounterTable) -> Result<(), ScanError> {
        if !self.same_keys(other) {
            return Err(ScanError::KeySetMismatch);
        }
        for ((_, n), (_, m)) in self.entries.iter_mut().zip(&other.entries) {
            *n += m;
        }
        Ok(())
    }

    /// Copy of this table with the same keys and every count at zero.
    pub fn zeroed(&self) -> Self {
        Self {
            entries: self.entries.iter().map(|(k, _)| (k.clone(), 0)).collect(),
            index: self.index.clone(),
        }
    }
}

impl PartialEq for CounterTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for CounterTable {}

impl<'a> IntoIterator for &'a CounterTable {
    type Item = (&'a str, u64);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, u64)>,
        fn(&'a (String, u64)) -> (&'a str, u64),
    >;

    fn into_iter(self) -> Self::IntoIter {
        let f: fn(&'a (String, u64)) -> (&'a str, u64) = entry_ref;
        self.entries.iter().map(f)
    }
}

fn entry_ref((key, count): &(String, u64)) -> (&str, u64) {
    (key.as_str(), *count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CounterTable {
        CounterTable::new(["39=2", "39=1", "39=4"])
    }

    #[test]
    fn test_new_table_is_all_zero_in_order() {
        let t = table();
        let rows: Vec<_> = t.iter().collect();
        assert_eq!(rows, vec![("39=2", 0), ("39=1", 0), ("39=4", 0)]);
        assert_eq!(t.total(), 0);
    }

    #[test]
    fn test_increment_known_key() {
        let mut t = table();
        assert!(t.increment("39=1"));
        assert!(t.increment("39=1"));
        assert_eq!(t.get("39=1"), Some(2));
        assert_eq!(t.get("39=2"), Some(0));
        assert_eq!(t.total(), 2);
    }

    #[test]
    fn test_increment_unknown_key_is_noop() {
        let mut t = table();
        assert!(!t.increment("39=9"));
        assert_eq!(t.len(), 3);
        assert_eq!(t.get("39=9"), None);
        assert!(!t.contains("39=9"));
        assert!(t.contains("39=4"));
        assert_eq!(t, table());
    }

    #[test]
    fn test_duplicate_keys_collapse() {
        let t = CounterTable::new(["39=2", "39=4", "39=2"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.to_rows(), vec![("39=2".into(), 0), ("39=4".into(), 0)]);
    }

    #[test]
    fn test_empty_table() {
        let t = CounterTable::new(Vec::<String>::new());
        assert!(t.is_empty());
        assert_eq!(t.iter().count(), 0);
    }

    #[test]
    fn test_merge_sums_counts() {
        let mut a = table();
        let mut b = table();
        a.increment("39=2");
        b.increment("39=2");
        b.increment("39=4");
        a.merge(&b).unwrap();
        assert_eq!(a.get("39=2"), Some(2));
        assert_eq!(a.get("39=4"), Some(1));
        assert_eq!(a.get("39=1"), Some(0));
    }

    #[test]
    fn test_merge_rejects_different_keys() {
        let mut a = table();
        let b = CounterTable::new(["39=2"]);
        assert!(matches!(a.merge(&b), Err(ScanError::KeySetMismatch)));
    }

    #[test]
    fn test_zeroed_keeps_keys() {
        let mut t = table();
        t.increment("39=4");
        let z = t.zeroed();
        assert!(z.same_keys(&t));
        assert_eq!(z.total(), 0);
        assert_eq!(z, table());
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let t = table();
        let keys: Vec<&str> = (&t).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["39=2", "39=1", "39=4"]);
    }
}
