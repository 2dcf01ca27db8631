use crate::store::CacheStore;
use crate::strategy::EvictionPolicy;
use crate::strategy::engine::PolicyCache;
use crate::strategy::recency::RecencyList;

/// Evicts the key whose last `put` or `get` is the oldest.
#[derive(Debug)]
pub struct LruPolicy<K> {
    recency: RecencyList<K>,
}

impl<K> Default for LruPolicy<K> {
    fn default() -> Self {
        LruPolicy {
            recency: RecencyList::default(),
        }
    }
}

impl<K> EvictionPolicy<K> for LruPolicy<K>
where
    K: Eq + Clone + Send + 'static,
{
    fn on_insert(&mut self, key: &K) {
        self.recency.touch(key);
    }

    fn on_access(&mut self, key: &K) {
        self.recency.touch(key);
    }

    fn on_remove(&mut self, key: &K) {
        self.recency.remove(key);
    }

    fn clear(&mut self) {
        self.recency.clear();
    }

    fn victim<V>(&self, _store: &CacheStore<K, V>) -> Option<K> {
        self.recency.least_recent().cloned()
    }
}

pub type LRUCache<K, V> = PolicyCache<K, V, LruPolicy<K>>;
