//! # Ordered Dictionary
//!
//! A thin, generic wrapper over [`BTreeMap`] that adds the one thing the
//! value algebra needs and std doesn't ship: merge-with-combiner semantics
//! where the combiner can signal deletion. A combiner returns `Option<V>`;
//! `Some` keeps (possibly replacing) the entry, `None` removes the key
//! entirely. Threading that through both levels of a nested map is what
//! makes cascading prune-on-empty a one-liner instead of a special case.
//!
//! Iteration order is always ascending by key. Two dictionaries compare
//! equal exactly when their ascending key/value sequences are equal, which
//! `BTreeMap` gives us for free.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered mapping with merge-with-combiner semantics.
///
/// Keys iterate in ascending `Ord` order. For byte-string keys this is
/// byte-lexicographic order, which is exactly the canonical order the
/// [`assets`](crate::assets) module is built on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dict<K: Ord, V> {
    entries: BTreeMap<K, V>,
}

impl<K: Ord, V> Dict<K, V> {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a dictionary holding a single entry.
    pub fn singleton(key: K, value: V) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(key, value);
        Self { entries }
    }

    /// Returns a reference to the value stored under `key`, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Inserts `value` under `key`, returning the previous value if the
    /// key was already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Inserts `value` under `key`, resolving a collision with `combine`.
    ///
    /// If the key is absent the value is inserted as-is. If the key is
    /// present, `combine(key, existing, value)` decides the outcome:
    /// `Some(v)` stores `v`, `None` removes the key.
    pub fn insert_with<F>(&mut self, key: K, value: V, combine: F)
    where
        F: FnOnce(&K, V, V) -> Option<V>,
    {
        match self.entries.remove_entry(&key) {
            None => {
                self.entries.insert(key, value);
            }
            Some((key, existing)) => {
                if let Some(resolved) = combine(&key, existing, value) {
                    self.entries.insert(key, resolved);
                }
            }
        }
    }

    /// Removes the entry under `key`, returning its value if present.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key)
    }

    /// Returns `true` if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter()
    }

    /// Iterates keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys()
    }

    /// Folds over the entries in ascending key order.
    pub fn fold<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &K, &V) -> A,
    {
        self.entries
            .iter()
            .fold(initial, |acc, (key, value)| combine(acc, key, value))
    }

    /// Merges `other` into `self`, resolving collisions with `combine`.
    ///
    /// Entries present on only one side pass through untouched. For a key
    /// present on both sides, `combine(key, left, right)` decides: `Some`
    /// keeps the resolved value, `None` drops the key from the result.
    pub fn union_with<F>(mut self, other: Self, mut combine: F) -> Self
    where
        F: FnMut(&K, V, V) -> Option<V>,
    {
        for (key, value) in other.entries {
            self.insert_with(key, value, &mut combine);
        }
        self
    }
}

impl<K: Ord, V> Default for Dict<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Dict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dict_has_no_entries() {
        let dict: Dict<Vec<u8>, i64> = Dict::new();
        assert!(dict.is_empty());
        assert_eq!(dict.len(), 0);
    }

    #[test]
    fn singleton_holds_one_entry() {
        let dict = Dict::singleton(b"key".to_vec(), 7);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(&b"key".to_vec()), Some(&7));
    }

    #[test]
    fn iteration_is_ascending_by_key() {
        let mut dict = Dict::new();
        dict.insert(b"cc".to_vec(), 3);
        dict.insert(b"aa".to_vec(), 1);
        dict.insert(b"bb".to_vec(), 2);

        let keys: Vec<_> = dict.keys().cloned().collect();
        assert_eq!(keys, vec![b"aa".to_vec(), b"bb".to_vec(), b"cc".to_vec()]);
    }

    #[test]
    fn insert_with_resolves_collision() {
        let mut dict = Dict::singleton("k", 10);
        dict.insert_with("k", 5, |_, old, new| Some(old + new));
        assert_eq!(dict.get(&"k"), Some(&15));
    }

    #[test]
    fn insert_with_none_deletes_key() {
        let mut dict = Dict::singleton("k", 10);
        dict.insert_with("k", -10, |_, old, new| match old + new {
            0 => None,
            sum => Some(sum),
        });
        assert!(dict.is_empty());
    }

    #[test]
    fn insert_with_absent_key_just_inserts() {
        let mut dict: Dict<&str, i64> = Dict::new();
        dict.insert_with("k", 42, |_, _, _| None);
        assert_eq!(dict.get(&"k"), Some(&42));
    }

    #[test]
    fn union_with_sums_collisions_and_passes_singles_through() {
        let left: Dict<&str, i64> = [("a", 1), ("b", 2)].into_iter().collect();
        let right: Dict<&str, i64> = [("b", 3), ("c", 4)].into_iter().collect();

        let merged = left.union_with(right, |_, l, r| Some(l + r));
        let entries: Vec<_> = merged.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(entries, vec![("a", 1), ("b", 5), ("c", 4)]);
    }

    #[test]
    fn union_with_prunes_zero_sums() {
        let left: Dict<&str, i64> = [("a", 1), ("b", 2)].into_iter().collect();
        let right: Dict<&str, i64> = [("a", -1)].into_iter().collect();

        let merged = left.union_with(right, |_, l, r| match l + r {
            0 => None,
            sum => Some(sum),
        });
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(&"b"), Some(&2));
    }

    #[test]
    fn fold_visits_in_ascending_order() {
        let dict: Dict<&str, i64> = [("b", 2), ("a", 1), ("c", 3)].into_iter().collect();
        let trace = dict.fold(String::new(), |mut acc, key, value| {
            acc.push_str(&format!("{key}={value};"));
            acc
        });
        assert_eq!(trace, "a=1;b=2;c=3;");
    }

    #[test]
    fn structural_equality_ignores_insertion_order() {
        let forward: Dict<&str, i64> = [("a", 1), ("b", 2)].into_iter().collect();
        let backward: Dict<&str, i64> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(forward, backward);
    }
}
