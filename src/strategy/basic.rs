use std::fmt::Display;
use std::hash::Hash;
use std::num::NonZeroUsize;

use crate::store::CacheStore;
use crate::strategy::EvictionPolicy;
use crate::strategy::engine::PolicyCache;

/// The reference contract: no capacity limit and no victim, ever.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicPolicy;

impl<K> EvictionPolicy<K> for BasicPolicy {
    const BOUNDED: bool = false;

    fn victim<V>(&self, _store: &CacheStore<K, V>) -> Option<K> {
        None
    }
}

pub type BasicCache<K, V> = PolicyCache<K, V, BasicPolicy>;

impl<K, V> BasicCache<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    pub fn unbounded() -> Self {
        PolicyCache::new(NonZeroUsize::MIN)
    }
}
