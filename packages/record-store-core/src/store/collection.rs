//! Insertion-ordered keyed collection.

use std::collections::HashMap;
use std::hash::Hash;

/// Keyed collection that iterates in insertion order.
///
/// Keys map to positions in `entries`. Removal shifts later entries down,
/// so the relative order of the survivors is preserved.
#[derive(Debug)]
pub(crate) struct Collection<K, V> {
    index: HashMap<K, usize>,
    entries: Vec<(K, V)>,
}

impl<K: Copy + Eq + Hash, V> Collection<K, V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.index.get(key) {
            Some(&pos) => Some(&mut self.entries[pos].1),
            None => None,
        }
    }

    /// Inserts or replaces the value under `key`.
    ///
    /// A replaced value keeps its original position. Returns the previous
    /// value if there was one.
    pub(crate) fn upsert(&mut self, key: K, value: V) -> Option<V> {
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        let pos = self.index.remove(key)?;
        let (_, value) = self.entries.remove(pos);
        for (k, _) in &self.entries[pos..] {
            if let Some(p) = self.index.get_mut(k) {
                *p -= 1;
            }
        }
        Some(value)
    }

    /// Keeps only the entries for which `keep` returns true.
    ///
    /// Returns the number of removed entries.
    pub(crate) fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|(k, v)| keep(k, v));
        let removed = before - self.entries.len();
        if removed > 0 {
            self.index.clear();
            for (pos, (k, _)) in self.entries.iter().enumerate() {
                self.index.insert(*k, pos);
            }
        }
        removed
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}
