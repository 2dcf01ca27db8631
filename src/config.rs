//! Cache configuration.
//!
//! Everything is set programmatically; the crate never reads environment
//! variables or files.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::error::{CacheError, Result};
use crate::strategy::StrategyType;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Interval of the background cleaner when a TTL is set.
pub const DEFAULT_CLEAN_INTERVAL: Duration = Duration::from_secs(1);

/// Parameters for building a [`Boundcache`](crate::Boundcache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries; ignored by [`StrategyType::Basic`]
    pub capacity: usize,
    pub strategy: StrategyType,
    /// Entries expire this long after their last `put`; `None` disables expiry
    pub ttl: Option<Duration>,
    /// How often the background cleaner runs when `ttl` is set
    pub clean_interval: Duration,
}

impl CacheConfig {
    pub fn new(strategy: StrategyType) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_strategy(mut self, strategy: StrategyType) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn with_clean_interval(mut self, interval: Duration) -> Self {
        self.clean_interval = interval;
        self
    }

    /// Checks the configuration and returns the effective capacity.
    pub fn validate(&self) -> Result<NonZeroUsize> {
        if self.ttl.is_some() && self.clean_interval.is_zero() {
            return Err(CacheError::ZeroInterval);
        }
        match NonZeroUsize::new(self.capacity) {
            Some(capacity) => Ok(capacity),
            None if !self.strategy.is_bounded() => Ok(DEFAULT_CAPACITY),
            None => Err(CacheError::ZeroCapacity(self.strategy)),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY.get(),
            strategy: StrategyType::LRU,
            ttl: None,
            clean_interval: DEFAULT_CLEAN_INTERVAL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.capacity, 4);
        assert_eq!(config.strategy, StrategyType::LRU);
        assert_eq!(config.ttl, None);
        assert_eq!(config.clean_interval, Duration::from_secs(1));
        assert_eq!(config.validate(), Ok(DEFAULT_CAPACITY));
    }

    #[test]
    fn test_builder_setters() {
        let config = CacheConfig::new(StrategyType::LFU)
            .with_capacity(10)
            .with_ttl(Duration::from_secs(30))
            .with_clean_interval(Duration::from_millis(500));

        assert_eq!(config.strategy, StrategyType::LFU);
        assert_eq!(config.capacity, 10);
        assert_eq!(config.ttl, Some(Duration::from_secs(30)));
        assert_eq!(config.clean_interval, Duration::from_millis(500));
    }

    #[test]
    fn test_zero_capacity_rejected_for_bounded() {
        let config = CacheConfig::new(StrategyType::FIFO).with_capacity(0);
        assert_eq!(
            config.validate(),
            Err(CacheError::ZeroCapacity(StrategyType::FIFO))
        );
    }

    #[test]
    fn test_zero_capacity_ignored_for_basic() {
        let config = CacheConfig::new(StrategyType::Basic).with_capacity(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected_with_ttl() {
        let config = CacheConfig::default()
            .with_ttl(Duration::from_secs(1))
            .with_clean_interval(Duration::ZERO);
        assert_eq!(config.validate(), Err(CacheError::ZeroInterval));

        let config = CacheConfig::default().with_clean_interval(Duration::ZERO);
        assert!(config.validate().is_ok());
    }
}
