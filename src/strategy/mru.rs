use crate::store::CacheStore;
use crate::strategy::EvictionPolicy;
use crate::strategy::engine::PolicyCache;
use crate::strategy::recency::RecencyList;

/// Evicts the key touched last by `put` or `get`.
#[derive(Debug)]
pub struct MruPolicy<K> {
    recency: RecencyList<K>,
}

impl<K> Default for MruPolicy<K> {
    fn default() -> Self {
        MruPolicy {
            recency: RecencyList::default(),
        }
    }
}

impl<K> EvictionPolicy<K> for MruPolicy<K>
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
        self.recency.most_recent().cloned()
    }
}

pub type MRUCache<K, V> = PolicyCache<K, V, MruPolicy<K>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::CacheStrategy;
    use std::num::NonZeroUsize;

    #[test]
    fn test_evicts_last_read() {
        let mut cache: MRUCache<char, u32> = PolicyCache::new(NonZeroUsize::new(3).unwrap());
        cache.put('a', 1);
        cache.put('b', 2);
        cache.put('c', 3);
        cache.get(&'a');
        cache.put('d', 4);

        assert_eq!(cache.entries(), vec![('b', 2), ('c', 3), ('d', 4)]);

        // 'd' was the last key touched
        cache.put('e', 5);
        assert_eq!(cache.entries(), vec![('b', 2), ('c', 3), ('e', 5)]);
    }
}
