#[cfg(test)]
mod lifo_tests {
    use boundcache::{Boundcache, StrategyType};

    fn create_cache() -> Boundcache<&'static str, &'static str> {
        Boundcache::new(StrategyType::LIFO)
    }

    fn fill(cache: &mut Boundcache<&'static str, &'static str>) {
        cache.put("A", "Hello");
        cache.put("B", "World");
        cache.put("C", "Holberton");
        cache.put("D", "School");
    }

    #[test]
    fn test_lifo_evicts_last_inserted() {
        let mut cache = create_cache();
        fill(&mut cache);
        cache.put("E", "Battery"); // evicts "D"

        assert!(!cache.contains(&"D"));
        assert_eq!(
            cache.entries(),
            vec![("A", "Hello"), ("B", "World"), ("C", "Holberton"), ("E", "Battery")]
        );
    }

    #[test]
    fn test_newest_key_keeps_being_evicted() {
        let mut cache = create_cache();
        fill(&mut cache);
        cache.put("E", "Battery");
        cache.put("F", "Mission"); // evicts "E"

        assert!(!cache.contains(&"E"));
        assert!(cache.contains(&"F"));
        assert_eq!(cache.len(), 4);
        assert_eq!(cache.stats().evictions, 2);
    }

    #[test]
    fn test_overwrite_does_not_make_key_newer() {
        let mut cache = create_cache();
        fill(&mut cache);
        cache.put("B", "Street");
        cache.put("E", "Battery");

        assert!(!cache.contains(&"D"));
        assert_eq!(cache.get(&"B"), Some("Street"));
    }

    #[test]
    fn test_reads_do_not_change_eviction_order() {
        let mut cache = create_cache();
        fill(&mut cache);
        cache.get(&"A");
        cache.put("E", "Battery");

        assert!(cache.contains(&"A"));
        assert!(!cache.contains(&"D"));
    }
}
