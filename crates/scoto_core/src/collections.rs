//! Own-entry storage for scopes.

use crate::value::Value;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::rc::Rc;

/// An entry key. Keys are shared so copying entries between scopes is cheap.
pub type Key = Rc<str>;

/// The own entries of a single scope, in insertion order.
///
/// There are no reserved or inherited names: `toString`, `constructor` and
/// `__proto__` are ordinary keys.
#[derive(Debug, Clone, Default)]
pub struct OwnEntries {
    map: IndexMap<Key, Value, FxBuildHasher>,
}

impl OwnEntries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Insert or overwrite an entry. Overwriting keeps the key's position.
    pub fn insert(&mut self, key: impl Into<Key>, value: Value) -> Option<Value> {
        self.map.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.map.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Remove an entry, preserving the order of the remaining keys.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.shift_remove(key)
    }

    /// Copy every entry of `other` on top of this map.
    pub fn overlay(&mut self, other: &OwnEntries) {
        for (key, value) in other.iter() {
            self.map.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.map.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.map.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.map.values()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

/// Content equality: same keys mapped to strictly-equal values, in any order.
impl PartialEq for OwnEntries {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for OwnEntries {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut entries = OwnEntries::new();
        for (key, value) in iter {
            entries.insert(key, value);
        }
        entries
    }
}
