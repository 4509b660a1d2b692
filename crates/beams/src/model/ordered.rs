//! Insertion-ordered string-keyed map.
//!
//! Drawings are traversed in the order their paths and child models were
//! added, so the map keeps a plain `Vec` of entries plus a key -> slot index.
//! The projected model holds one entry per leaf path, so inserts and lookups
//! go through the index. Serializes as a JSON object.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Invariant: `index[k] == i` iff `entries[i].0 == k`.
#[derive(Clone)]
pub struct NamedMap<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for NamedMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for NamedMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: fmt::Debug> fmt::Debug for NamedMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T> NamedMap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced entry keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        if let Some(&idx) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[idx].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Removes `key`; later entries shift down one slot and keep their order.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let idx = self.index.remove(key)?;
        let (_, value) = self.entries.remove(idx);
        for (k, _) in &self.entries[idx..] {
            if let Some(slot) = self.index.get_mut(k) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for NamedMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = NamedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<T> IntoIterator for NamedMap<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: Serialize> Serialize for NamedMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct NamedMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for NamedMapVisitor<T> {
    type Value = NamedMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map keyed by id")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = NamedMap::new();
        while let Some((k, v)) = access.next_entry::<String, T>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NamedMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NamedMapVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_on_replace() {
        let mut m: NamedMap<i32> = [("b", 1), ("a", 2)].into_iter().collect();
        assert_eq!(m.insert("b", 3), Some(1));
        m.insert("c", 4);
        assert_eq!(m.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(m.remove("a"), Some(2));
        assert_eq!(m.values().copied().collect::<Vec<_>>(), [3, 4]);
        assert!(!m.contains_key("a"));
    }

    #[test]
    fn json_object_order_survives() {
        let m: NamedMap<u8> = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        assert_eq!(m.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
    }

    #[test]
    fn index_tracks_many_inserts_and_removals() {
        let n = 10_000;
        let mut m: NamedMap<usize> = (0..n).map(|i| (format!("k{i}"), i)).collect();
        assert_eq!(m.len(), n);
        assert_eq!(m.insert("k17", 0), Some(17));
        assert_eq!(m.keys().nth(17), Some("k17"));

        for i in (0..n).step_by(2) {
            assert_eq!(m.remove(&format!("k{i}")), Some(i));
        }
        assert_eq!(m.len(), n / 2);
        assert!(!m.contains_key("k4"));
        assert_eq!(m.get("k9999"), Some(&9999));
        assert_eq!(m.keys().next(), Some("k1"));

        m.insert("k4", 4);
        assert_eq!(m.keys().last(), Some("k4"));
        assert_eq!(m.get("k4"), Some(&4));
        assert_eq!(m.insert("k17", 17), Some(0));
        for (i, (k, v)) in m.iter().enumerate().take(n / 2) {
            assert_eq!(k, format!("k{}", 2 * i + 1));
            assert_eq!(m.get(k), Some(v));
        }
    }
}
