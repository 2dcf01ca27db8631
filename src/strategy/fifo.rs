use std::hash::Hash;

use crate::store::CacheStore;
use crate::strategy::EvictionPolicy;
use crate::strategy::engine::PolicyCache;

/// Evicts the oldest inserted key. Reads and overwrites do not reorder
/// anything, so the store's own insertion order is the whole bookkeeping.
#[derive(Debug, Default, Clone, Copy)]
pub struct FifoPolicy;

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for FifoPolicy {
    fn victim<V>(&self, store: &CacheStore<K, V>) -> Option<K> {
        store.oldest().cloned()
    }
}

pub type FIFOCache<K, V> = PolicyCache<K, V, FifoPolicy>;
