#[cfg(test)]
mod mru_tests {
    use boundcache::{Boundcache, StrategyType};

    fn create_cache() -> Boundcache<&'static str, &'static str> {
        Boundcache::new(StrategyType::MRU)
    }

    fn fill(cache: &mut Boundcache<&'static str, &'static str>) {
        cache.put("A", "Hello");
        cache.put("B", "World");
        cache.put("C", "Holberton");
        cache.put("D", "School");
    }

    #[test]
    fn test_mru_evicts_most_recently_read() {
        let mut cache = create_cache();
        fill(&mut cache);
        cache.get(&"B");
        cache.put("E", "Battery"); // evicts "B"

        assert!(!cache.contains(&"B"));
        assert_eq!(
            cache.entries(),
            vec![("A", "Hello"), ("C", "Holberton"), ("D", "School"), ("E", "Battery")]
        );
    }

    #[test]
    fn test_mru_evicts_last_put_without_reads() {
        let mut cache = create_cache();
        fill(&mut cache);
        cache.put("E", "Battery"); // evicts "D"
        cache.put("F", "Mission"); // evicts "E"

        assert!(!cache.contains(&"D"));
        assert!(!cache.contains(&"E"));
        assert!(cache.contains(&"F"));
    }

    #[test]
    fn test_overwrite_counts_as_use() {
        let mut cache = create_cache();
        fill(&mut cache);
        cache.put("A", "Street");
        cache.put("E", "Battery"); // evicts "A"

        assert!(!cache.contains(&"A"));
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn test_missed_read_changes_nothing() {
        let mut cache = create_cache();
        fill(&mut cache);
        assert_eq!(cache.get(&"Z"), None);
        cache.put("E", "Battery");

        assert!(!cache.contains(&"D"));
        assert_eq!(cache.stats().misses, 1);
    }
}
