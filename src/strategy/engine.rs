use std::fmt::Display;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::error::{CacheError, Result};
use crate::stats::CacheStats;
use crate::store::CacheStore;
use crate::strategy::{CacheStrategy, EvictionPolicy};

/// Everything the read-check-evict-write sequence touches, kept behind a
/// single lock.
struct Shared<K, V, P> {
    store: CacheStore<K, V>,
    policy: P,
    stats: CacheStats,
}

impl<K, V, P> Shared<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<K>,
{
    fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
        let expired = self.store.remove_expired(now);
        for key in &expired {
            self.policy.on_remove(key);
            self.stats.record_expiration();
        }
        expired.len()
    }

    fn live_len(&self, now: DateTime<Utc>) -> usize {
        self.store
            .iter()
            .filter(|(_, entry)| !entry.is_expired(now))
            .count()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A capacity-bounded cache driven by an [`EvictionPolicy`].
///
/// Entries optionally expire after a TTL. Expired entries are invisible to
/// readers, dropped lazily on access and periodically by a background cleaner
/// when one is running. Dropping the cache stops its cleaner.
pub struct PolicyCache<K, V, P>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    P: EvictionPolicy<K>,
{
    capacity: NonZeroUsize,
    ttl: Option<chrono::Duration>,
    shared: Arc<Mutex<Shared<K, V, P>>>,
    cleaner: Mutex<Option<JoinHandle<()>>>,
}

impl<K, V, P> PolicyCache<K, V, P>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    P: EvictionPolicy<K>,
{
    pub fn new(capacity: NonZeroUsize) -> Self {
        PolicyCache {
            capacity,
            ttl: None,
            shared: Arc::new(Mutex::new(Shared {
                store: CacheStore::new(),
                policy: P::default(),
                stats: CacheStats::new(),
            })),
            cleaner: Mutex::new(None),
        }
    }

    /// Makes every entry written from now on expire `ttl` after its last `put`.
    pub fn with_ttl(mut self, ttl: Duration) -> Result<Self> {
        let ttl = chrono::Duration::from_std(ttl).map_err(|_| CacheError::TtlOutOfRange(ttl))?;
        self.ttl = Some(ttl);
        Ok(self)
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl.and_then(|ttl| ttl.to_std().ok())
    }

    fn expiry_from(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.ttl.and_then(|ttl| now.checked_add_signed(ttl))
    }

    fn is_full(&self, len: usize) -> bool {
        P::BOUNDED && len >= self.capacity.get()
    }
}

impl<K, V, P> CacheStrategy<K, V> for PolicyCache<K, V, P>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    P: EvictionPolicy<K>,
{
    fn put(&mut self, key: K, value: V) {
        let now = Utc::now();
        let expires_at = self.expiry_from(now);
        let mut guard = lock(&self.shared);
        let shared = &mut *guard;

        if self.ttl.is_some() {
            shared.purge_expired(now);
        }

        if shared.store.contains(&key) {
            shared.store.insert(key.clone(), value, expires_at);
            shared.policy.on_access(&key);
            return;
        }

        if self.is_full(shared.store.len()) {
            if let Some(victim) = shared.policy.victim(&shared.store) {
                shared.store.remove(&victim);
                shared.policy.on_remove(&victim);
                shared.stats.record_eviction();
                info!(key = %victim, "DISCARD: {victim}");
            }
        }

        shared.store.insert(key.clone(), value, expires_at);
        shared.policy.on_insert(&key);
    }

    fn get(&mut self, key: &K) -> Option<V> {
        let now = Utc::now();
        let mut guard = lock(&self.shared);
        let shared = &mut *guard;

        let expired = match shared.store.get(key) {
            Some(entry) if !entry.is_expired(now) => false,
            Some(_) => true,
            None => {
                shared.stats.record_miss();
                return None;
            }
        };

        if expired {
            shared.store.remove(key);
            shared.policy.on_remove(key);
            shared.stats.record_expiration();
            shared.stats.record_miss();
            debug!(key = %key, "expired entry dropped on read");
            return None;
        }

        shared.policy.on_access(key);
        shared.stats.record_hit();
        shared.store.get(key).map(|entry| entry.value().clone())
    }

    fn remove(&mut self, key: &K) {
        let mut guard = lock(&self.shared);
        let shared = &mut *guard;
        if shared.store.remove(key).is_some() {
            shared.policy.on_remove(key);
        }
    }

    fn contains(&self, key: &K) -> bool {
        let now = Utc::now();
        lock(&self.shared)
            .store
            .get(key)
            .is_some_and(|entry| !entry.is_expired(now))
    }

    fn len(&self) -> usize {
        lock(&self.shared).live_len(Utc::now())
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self) {
        let mut shared = lock(&self.shared);
        shared.store.clear();
        shared.policy.clear();
    }

    fn entries(&self) -> Vec<(K, V)> {
        let now = Utc::now();
        lock(&self.shared)
            .store
            .iter()
            .filter(|(_, entry)| !entry.is_expired(now))
            .map(|(key, entry)| (key.clone(), entry.value().clone()))
            .collect()
    }

    fn capacity(&self) -> Option<usize> {
        P::BOUNDED.then_some(self.capacity.get())
    }

    fn stats(&self) -> CacheStats {
        let shared = lock(&self.shared);
        CacheStats {
            entries: shared.live_len(Utc::now()),
            ..shared.stats
        }
    }

    fn start_cleaner(&self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(CacheError::ZeroInterval);
        }
        let runtime = Handle::try_current().map_err(|_| CacheError::NoRuntime)?;
        let shared = Arc::clone(&self.shared);

        let task = runtime.spawn(async move {
            loop {
                sleep(interval).await;
                let removed = lock(&shared).purge_expired(Utc::now());
                if removed > 0 {
                    debug!(removed, "cleaner purged expired entries");
                }
            }
        });

        if let Some(previous) = lock(&self.cleaner).replace(task) {
            previous.abort();
        }
        info!(?interval, "cache cleaner started");
        Ok(())
    }

    fn stop_cleaner(&self) {
        if let Some(task) = lock(&self.cleaner).take() {
            task.abort();
            info!("cache cleaner stopped");
        }
    }
}

impl<K, V, P> Drop for PolicyCache<K, V, P>
where
    K: Eq + Hash + Clone + Display + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    P: EvictionPolicy<K>,
{
    fn drop(&mut self) {
        if let Some(task) = lock(&self.cleaner).take() {
            task.abort();
        }
    }
}
