//! In-memory key-value caches with pluggable eviction policies.
//!
//! Every variant shares one contract: `put` stores a value, `get` returns it or
//! `None`, and neither ever fails. Bounded variants discard exactly one entry
//! when a new key arrives at capacity, chosen by their policy:
//!
//! | Strategy | Evicts |
//! |---|---|
//! | `Basic` | nothing, unbounded |
//! | `FIFO` | first inserted key |
//! | `LIFO` | last inserted key |
//! | `LRU` | least recently used key |
//! | `MRU` | most recently used key |
//! | `LFU` | least frequently used key, then least recently used |
//!
//! ```
//! use boundcache::{Boundcache, StrategyType};
//!
//! let mut cache: Boundcache<&str, &str> = Boundcache::new(StrategyType::FIFO);
//! for (key, value) in [("A", "Hello"), ("B", "World"), ("C", "Holberton"), ("D", "School")] {
//!     cache.put(key, value);
//! }
//! cache.put("E", "Battery");
//!
//! assert_eq!(cache.get(&"A"), None);
//! assert_eq!(cache.get(&"E"), Some("Battery"));
//! ```

pub mod boundcache;
pub mod config;
pub mod error;
pub mod stats;
pub mod store;
pub mod strategy;


pub use boundcache::{Boundcache, CacheSnapshot};
pub use config::{CacheConfig, DEFAULT_CAPACITY};
pub use error::{CacheError, Result};
pub use stats::CacheStats;
pub use strategy::{CacheStrategy, EvictionPolicy, StrategyType};
