//! No-op cache used when Redis is disabled or unreachable.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;

/// Cache that stores nothing: every read is a miss.
///
/// Reports itself healthy, since running without a cache is a supported mode.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        tracing::debug!("Caching disabled");
        Self
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: &str, _ttl_seconds: Option<u64>) -> CacheResult<()> {
        Ok(())
    }

    async fn invalidate(&self, _key: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn incr(&self, _key: &str) -> CacheResult<Option<i64>> {
        Ok(None)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_never_hits() {
        let cache = NullCache::new();

        cache.set("key", "value", None).await.unwrap();

        assert!(cache.get("key").await.unwrap().is_none());
        assert!(cache.invalidate("key").await.is_ok());
        assert!(cache.incr("counter").await.unwrap().is_none());
        assert!(cache.health_check().await);
    }
}
