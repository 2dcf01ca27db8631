//! Error types for cache construction.
//!
//! `put` and `get` never fail; errors only surface while configuring a cache
//! or its background cleaner.

use std::time::Duration;

use thiserror::Error;

use crate::strategy::StrategyType;

/// Configuration errors raised before a cache is handed to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A bounded strategy was configured with room for zero entries.
    #[error("capacity must be greater than zero for the {0} strategy")]
    ZeroCapacity(StrategyType),

    /// The cleaner interval was zero.
    #[error("clean interval must be greater than zero")]
    ZeroInterval,

    /// The TTL does not fit in a timestamp offset.
    #[error("ttl of {0:?} is out of range")]
    TtlOutOfRange(Duration),

    /// `start_cleaner` was called outside of a tokio runtime.
    #[error("the background cleaner requires a running tokio runtime")]
    NoRuntime,
}

/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
