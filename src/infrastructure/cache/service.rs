//! Cache service trait and error types.

use async_trait::async_trait;

/// Errors raised while setting up the cache backend.
///
/// Individual cache operations never fail towards callers; only establishing
/// the connection can.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("{context}: {source}")]
    Connection {
        context: &'static str,
        #[source]
        source: redis::RedisError,
    },
}

impl CacheError {
    pub(crate) fn connection(context: &'static str) -> impl FnOnce(redis::RedisError) -> Self {
        move |source| Self::Connection { context, source }
    }
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value cache for serialized query results.
///
/// Implementations are fail-open: a backend outage turns reads into misses
/// and writes into no-ops, so callers always fall back to the database.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached value, or `None` on a miss or backend error.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`. `None` uses the implementation's default TTL.
    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()>;

    /// Drops `key`. Called after every write that could make it stale.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Atomically increments the counter at `key` and returns its new value.
    ///
    /// Counters never expire. `None` means the backend cannot count (disabled
    /// or unreachable).
    async fn incr(&self, key: &str) -> CacheResult<Option<i64>>;

    /// Returns `true` when the backend answers.
    async fn health_check(&self) -> bool;
}
