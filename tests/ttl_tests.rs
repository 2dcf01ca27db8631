#[cfg(test)]
mod ttl_tests {
    use std::time::Duration;
    use tokio::time::sleep;

    use boundcache::{Boundcache, CacheConfig, CacheError, StrategyType};

    fn create_cache(
        strategy: StrategyType,
        ttl_ms: u64,
        clean_interval_ms: u64,
    ) -> Boundcache<String, String> {
        let config = CacheConfig::new(strategy)
            .with_ttl(Duration::from_millis(ttl_ms))
            .with_clean_interval(Duration::from_millis(clean_interval_ms));
        Boundcache::with_config(config).unwrap()
    }

    #[tokio::test]
    async fn test_expiration_removes_entry() {
        for strategy in StrategyType::ALL {
            let mut cache = create_cache(strategy, 100, 60_000);
            cache.put("x".to_string(), "expire_me".to_string());

            assert_eq!(cache.get(&"x".to_string()), Some("expire_me".to_string()));

            sleep(Duration::from_millis(250)).await;

            // expired: get returns None and drops it
            assert_eq!(cache.get(&"x".to_string()), None, "{strategy}");
            assert!(!cache.contains(&"x".to_string()));
            assert_eq!(cache.stats().expirations, 1);
        }
    }

    #[tokio::test]
    async fn test_put_refreshes_ttl() {
        let mut cache = create_cache(StrategyType::LRU, 500, 60_000);
        cache.put("x".to_string(), "1".to_string());
        sleep(Duration::from_millis(300)).await;
        cache.put("x".to_string(), "2".to_string());
        sleep(Duration::from_millis(300)).await;

        assert_eq!(cache.get(&"x".to_string()), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_cleaner_removes_expired() {
        let mut cache = create_cache(StrategyType::FIFO, 50, 50);
        cache.put("k1".to_string(), "v1".to_string());
        cache.put("k2".to_string(), "v2".to_string());

        sleep(Duration::from_millis(400)).await; // let entries expire and the cleaner run

        // purged in the background, not by a read
        assert_eq!(cache.stats().expirations, 2);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().misses, 0);
    }

    #[tokio::test]
    async fn test_stopped_cleaner_leaves_expired_entries_to_reads() {
        let mut cache = create_cache(StrategyType::LFU, 50, 50);
        cache.stop_cleaner();
        cache.put("k1".to_string(), "v1".to_string());

        sleep(Duration::from_millis(300)).await;

        assert_eq!(cache.stats().expirations, 0);
        assert_eq!(cache.get(&"k1".to_string()), None);
        assert_eq!(cache.stats().expirations, 1);
    }

    #[tokio::test]
    async fn test_restart_cleaner_does_not_panic() {
        let cache = create_cache(StrategyType::MRU, 1_000, 1_000);
        sleep(Duration::from_millis(50)).await;
        cache.start_cleaner(Duration::from_secs(1)).unwrap();
        cache.stop_cleaner();
        cache.stop_cleaner();
        sleep(Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn test_zero_interval_is_rejected() {
        let cache = create_cache(StrategyType::LRU, 1_000, 1_000);
        assert_eq!(cache.start_cleaner(Duration::ZERO), Err(CacheError::ZeroInterval));
    }

    #[test]
    fn test_ttl_requires_runtime() {
        let config = CacheConfig::new(StrategyType::LRU).with_ttl(Duration::from_secs(1));
        let result = Boundcache::<String, String>::with_config(config);
        assert!(matches!(result, Err(CacheError::NoRuntime)));
    }
}
