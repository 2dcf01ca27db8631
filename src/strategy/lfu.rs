use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::Hash;

use crate::store::CacheStore;
use crate::strategy::EvictionPolicy;
use crate::strategy::engine::PolicyCache;

/// Evicts the key with the fewest accesses.
///
/// Every `put` and `get` counts as one access. Keys sharing a count sit in a
/// bucket ordered by when they reached that count, which is also their last
/// access, so the front of the lowest bucket is the least recently used among
/// the least frequently used.
#[derive(Debug)]
pub struct LfuPolicy<K> {
    counts: HashMap<K, u64>,
    buckets: BTreeMap<u64, VecDeque<K>>,
}

impl<K> Default for LfuPolicy<K> {
    fn default() -> Self {
        LfuPolicy {
            counts: HashMap::new(),
            buckets: BTreeMap::new(),
        }
    }
}

impl<K> LfuPolicy<K>
where
    K: Eq + Hash + Clone,
{
    /// Access count of `key`, if it is tracked.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    fn detach(&mut self, key: &K, count: u64) {
        if let Some(bucket) = self.buckets.get_mut(&count) {
            bucket.retain(|k| k != key);
            if bucket.is_empty() {
                self.buckets.remove(&count);
            }
        }
    }
}

impl<K> EvictionPolicy<K> for LfuPolicy<K>
where
    K: Eq + Hash + Clone + Send + 'static,
{
    fn on_insert(&mut self, key: &K) {
        self.counts.insert(key.clone(), 1);
        self.buckets.entry(1).or_default().push_back(key.clone());
    }

    fn on_access(&mut self, key: &K) {
        let Some(count) = self.counts.get_mut(key) else {
            return;
        };
        *count += 1;
        let count = *count;

        self.detach(key, count - 1);
        self.buckets.entry(count).or_default().push_back(key.clone());
    }

    fn on_remove(&mut self, key: &K) {
        if let Some(count) = self.counts.remove(key) {
            self.detach(key, count);
        }
    }

    fn clear(&mut self) {
        self.counts.clear();
        self.buckets.clear();
    }

    fn victim<V>(&self, _store: &CacheStore<K, V>) -> Option<K> {
        self.buckets
            .values()
            .next()
            .and_then(|bucket| bucket.front())
            .cloned()
    }
}

pub type LFUCache<K, V> = PolicyCache<K, V, LfuPolicy<K>>;
