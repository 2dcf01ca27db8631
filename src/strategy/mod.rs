pub mod basic;
pub mod engine;
pub mod fifo;
pub mod lfu;
pub mod lifo;
pub mod lru;
pub mod mru;
mod recency;

use std::fmt;
use std::time::Duration;

use crate::error::Result;
use crate::stats::CacheStats;
use crate::store::CacheStore;

/// Object-safe interface shared by every cache variant.
///
/// Callers hold a `Box<dyn CacheStrategy<K, V>>` and never need to know which
/// eviction rule sits behind it.
pub trait CacheStrategy<K, V>: Send + Sync {
    /// Inserts or overwrites `key`. A new key arriving at capacity evicts
    /// exactly one victim first.
    fn put(&mut self, key: K, value: V);
    fn get(&mut self, key: &K) -> Option<V>;
    fn remove(&mut self, key: &K);
    fn contains(&self, key: &K) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
    fn clear(&mut self);
    /// Live entries in store iteration order.
    fn entries(&self) -> Vec<(K, V)>;
    /// `None` for the unbounded strategy.
    fn capacity(&self) -> Option<usize>;
    fn stats(&self) -> CacheStats;
    fn start_cleaner(&self, interval: Duration) -> Result<()>;
    fn stop_cleaner(&self);
}

/// Victim selection and the bookkeeping it needs.
///
/// The engine owns the store and calls these hooks while holding the cache
/// lock, so a policy never sees a half-applied `put`.
pub trait EvictionPolicy<K>: Default + Send + 'static {
    /// Unbounded policies are never asked for a victim.
    const BOUNDED: bool = true;

    /// A new key was admitted.
    fn on_insert(&mut self, _key: &K) {}

    /// An existing key was read by `get` or overwritten by `put`.
    fn on_access(&mut self, _key: &K) {}

    /// A key left the store (eviction, removal or expiry).
    fn on_remove(&mut self, _key: &K) {}

    fn clear(&mut self) {}

    /// Picks the key to discard. Only called on a full, non-empty store.
    fn victim<V>(&self, store: &CacheStore<K, V>) -> Option<K>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyType {
    /// No capacity limit, nothing is ever evicted
    Basic,
    FIFO,
    LIFO,
    LRU,
    MRU,
    LFU,
}

impl StrategyType {
    pub const ALL: [StrategyType; 6] = [
        StrategyType::Basic,
        StrategyType::FIFO,
        StrategyType::LIFO,
        StrategyType::LRU,
        StrategyType::MRU,
        StrategyType::LFU,
    ];

    pub fn is_bounded(self) -> bool {
        self != StrategyType::Basic
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyType::Basic => "Basic",
            StrategyType::FIFO => "FIFO",
            StrategyType::LIFO => "LIFO",
            StrategyType::LRU => "LRU",
            StrategyType::MRU => "MRU",
            StrategyType::LFU => "LFU",
        };
        f.write_str(name)
    }
}
