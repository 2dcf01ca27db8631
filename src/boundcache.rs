use std::fmt::{self, Display};
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::info;

use crate::config::{CacheConfig, DEFAULT_CAPACITY};
use crate::error::Result;
use crate::stats::CacheStats;
use crate::strategy::basic::BasicCache;
use crate::strategy::engine::PolicyCache;
use crate::strategy::fifo::FIFOCache;
use crate::strategy::lfu::LFUCache;
use crate::strategy::lifo::LIFOCache;
use crate::strategy::lru::LRUCache;
use crate::strategy::mru::MRUCache;
use crate::strategy::{CacheStrategy, EvictionPolicy, StrategyType};

/// Policy-agnostic cache handle.
///
/// `put` and `get` never fail: an absent key or value makes `put` a no-op and
/// a lookup that finds nothing returns `None`.
pub struct Boundcache<K, V> {
    inner: Box<dyn CacheStrategy<K, V>>,
    strategy: StrategyType,
}

impl<K, V> Boundcache<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// A cache holding at most [`DEFAULT_CAPACITY`] entries (unbounded for
    /// [`StrategyType::Basic`]), without expiry.
    pub fn new(strategy: StrategyType) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, strategy)
    }

    pub fn with_capacity(capacity: NonZeroUsize, strategy: StrategyType) -> Self {
        let inner: Box<dyn CacheStrategy<K, V>> = match strategy {
            StrategyType::Basic => Box::new(BasicCache::unbounded()),
            StrategyType::FIFO => Box::new(FIFOCache::new(capacity)),
            StrategyType::LIFO => Box::new(LIFOCache::new(capacity)),
            StrategyType::LRU => Box::new(LRUCache::new(capacity)),
            StrategyType::MRU => Box::new(MRUCache::new(capacity)),
            StrategyType::LFU => Box::new(LFUCache::new(capacity)),
        };

        Boundcache { inner, strategy }
    }

    /// Builds a cache from `config`. When a TTL is set the background cleaner
    /// is started, which needs a running tokio runtime.
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        let capacity = config.validate()?;
        let inner = match config.ttl {
            None => Self::with_capacity(capacity, config.strategy).inner,
            Some(ttl) => match config.strategy {
                StrategyType::Basic => expiring::<K, V, _>(BasicCache::unbounded(), ttl)?,
                StrategyType::FIFO => expiring::<K, V, _>(FIFOCache::new(capacity), ttl)?,
                StrategyType::LIFO => expiring::<K, V, _>(LIFOCache::new(capacity), ttl)?,
                StrategyType::LRU => expiring::<K, V, _>(LRUCache::new(capacity), ttl)?,
                StrategyType::MRU => expiring::<K, V, _>(MRUCache::new(capacity), ttl)?,
                StrategyType::LFU => expiring::<K, V, _>(LFUCache::new(capacity), ttl)?,
            },
        };

        if config.ttl.is_some() {
            inner.start_cleaner(config.clean_interval)?;
        }

        Ok(Boundcache {
            inner,
            strategy: config.strategy,
        })
    }

    /// Stores `value` under `key`. Does nothing if either is absent.
    pub fn put(&mut self, key: impl Into<Option<K>>, value: impl Into<Option<V>>) {
        if let (Some(key), Some(value)) = (key.into(), value.into()) {
            self.inner.put(key, value);
        }
    }

    /// Returns the value stored under `key`, or `None` if the key is absent or
    /// unknown.
    pub fn get<'k>(&mut self, key: impl Into<Option<&'k K>>) -> Option<V> {
        key.into().and_then(|key| self.inner.get(key))
    }

    pub fn remove(&mut self, key: &K) {
        self.inner.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Current entries in store iteration order.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.inner.entries()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.inner.capacity()
    }

    pub fn strategy(&self) -> StrategyType {
        self.strategy
    }

    pub fn stats(&self) -> CacheStats {
        self.inner.stats()
    }

    pub fn start_cleaner(&self, interval: Duration) -> Result<()> {
        self.inner.start_cleaner(interval)
    }

    pub fn stop_cleaner(&self) {
        self.inner.stop_cleaner()
    }
}

impl<K, V> Boundcache<K, V>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Display + Send + Sync + 'static,
{
    /// Listing of the current entries, rendered as `Current cache:` followed
    /// by one `key: value` line per entry.
    pub fn snapshot(&self) -> CacheSnapshot<K, V> {
        CacheSnapshot {
            entries: self.entries(),
        }
    }

    /// Emits [`Self::snapshot`] on the diagnostic channel.
    pub fn print_cache(&self) {
        info!("{}", self.snapshot());
    }
}

fn expiring<K, V, P>(
    cache: PolicyCache<K, V, P>,
    ttl: Duration,
) -> Result<Box<dyn CacheStrategy<K, V>>>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    P: EvictionPolicy<K>,
{
    Ok(Box::new(cache.with_ttl(ttl)?))
}

/// Point-in-time copy of a cache's entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheSnapshot<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> CacheSnapshot<K, V> {
    pub fn entries(&self) -> &[(K, V)] {
        &self.entries
    }
}

impl<K: Display, V: Display> Display for CacheSnapshot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Current cache:")?;
        for (key, value) in &self.entries {
            write!(f, "\n{key}: {value}")?;
        }
        Ok(())
    }
}
