use std::hash::Hash;

use crate::store::CacheStore;
use crate::strategy::EvictionPolicy;
use crate::strategy::engine::PolicyCache;

/// Evicts the most recently inserted key still present. Overwriting a key
/// does not make it newer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LifoPolicy;

impl<K: Eq + Hash + Clone> EvictionPolicy<K> for LifoPolicy {
    fn victim<V>(&self, store: &CacheStore<K, V>) -> Option<K> {
        store.newest().cloned()
    }
}

pub type LIFOCache<K, V> = PolicyCache<K, V, LifoPolicy>;
