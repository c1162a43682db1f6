//! Ordered keyed container.

use indexmap::IndexMap;

use super::key::Key;
use super::value::Value;

/// Map is a keyed container that keeps its entries in insertion order.
///
/// Entry order is significant for indexed-ness and key sorting.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<Key, Value>,
    /// Key used by the next [`Map::push`]; one past the largest integer key
    /// ever set.
    next_index: usize,
}

impl Map {
    pub fn new() -> Self {
        Map::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Sets the value for a key. An existing entry keeps its position.
    pub fn set(&mut self, key: Key, value: Value) {
        if let Key::Index(i) = key {
            self.next_index = self.next_index.max(i.saturating_add(1));
        }
        self.entries.insert(key, value);
    }

    /// Appends a value under the next free integer key.
    pub fn push(&mut self, value: Value) {
        self.set(Key::Index(self.next_index), value);
    }

    pub fn has(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes an entry, keeping the order of the others.
    pub fn delete(&mut self, key: &Key) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map is empty or its keys are `0..n-1` in order.
    pub fn is_indexed(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| *key == Key::Index(i))
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }

    /// Stable sort of the entries by key.
    pub fn sort_by_key_order<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Key, &Key) -> std::cmp::Ordering,
    {
        self.entries.sort_by(|a, _, b, _| compare(a, b));
    }

    /// Drops the keys and returns the values in order.
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_values().collect()
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut map = Map::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            map.set(key.into(), value);
        }
        map
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<Vec<Value>> for Map {
    fn from(values: Vec<Value>) -> Self {
        Map {
            next_index: values.len(),
            entries: values
                .into_iter()
                .enumerate()
                .map(|(i, value)| (Key::Index(i), value))
                .collect(),
        }
    }
}
