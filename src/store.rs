//! Insertion-ordered storage shared by every eviction policy.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use chrono::{DateTime, Utc};

/// A stored value and its optional expiry instant.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    value: V,
    expires_at: Option<DateTime<Utc>>,
}

impl<V> CacheEntry<V> {
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// An entry without an expiry instant never expires.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// Key to entry mapping that remembers the order in which keys were first
/// inserted.
///
/// Overwriting a key replaces its value in place; the key keeps its original
/// position. `oldest` and `newest` expose both ends of that order, which is
/// all FIFO and LIFO need to pick a victim.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    map: HashMap<K, CacheEntry<V>>,
    order: VecDeque<K>,
}

impl<K, V> Default for CacheStore<K, V> {
    fn default() -> Self {
        CacheStore {
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`, returning the previous value if any.
    pub fn insert(&mut self, key: K, value: V, expires_at: Option<DateTime<Utc>>) -> Option<V> {
        if let Some(entry) = self.map.get_mut(&key) {
            entry.expires_at = expires_at;
            return Some(std::mem::replace(&mut entry.value, value));
        }

        self.order.push_back(key.clone());
        self.map.insert(key, CacheEntry { value, expires_at });
        None
    }

    pub fn get(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.map.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.map.remove(key)?;
        self.order.retain(|k| k != key);
        Some(entry.value)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    /// First inserted key still present.
    pub fn oldest(&self) -> Option<&K> {
        self.order.front()
    }

    /// Last inserted key still present.
    pub fn newest(&self) -> Option<&K> {
        self.order.back()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &CacheEntry<V>)> {
        self.order
            .iter()
            .filter_map(|key| self.map.get(key).map(|entry| (key, entry)))
    }

    /// Drops every entry that expired at or before `now` and returns their keys
    /// in insertion order.
    pub fn remove_expired(&mut self, now: DateTime<Utc>) -> Vec<K> {
        let expired: Vec<K> = self
            .iter()
            .filter(|(_, entry)| entry.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        if !expired.is_empty() {
            self.map.retain(|_, entry| !entry.is_expired(now));
            self.order.retain(|key| self.map.contains_key(key));
        }

        expired
    }
}
