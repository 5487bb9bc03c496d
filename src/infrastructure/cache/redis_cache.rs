//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Namespace prepended to every key so the service can share a Redis database.
const KEY_NAMESPACE: &str = "dict_admin";

/// Redis cache shared by all requests.
///
/// `ConnectionManager` multiplexes one connection and reconnects on its own,
/// so cloning it per call is cheap.
pub struct RedisCache {
    conn: ConnectionManager,
    default_ttl: u64,
}

impl RedisCache {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// `default_ttl_seconds` applies to [`CacheService::set`] calls without an
    /// explicit TTL (`CACHE_TTL_SECONDS`).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid or the server
    /// cannot be reached.
    pub async fn connect(redis_url: &str, default_ttl_seconds: u64) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(CacheError::connection("Invalid Redis URL"))?;
        let mut conn = ConnectionManager::new(client)
            .await
            .map_err(CacheError::connection("Failed to connect to Redis"))?;

        conn.ping::<()>()
            .await
            .map_err(CacheError::connection("Redis PING failed"))?;

        info!(ttl = default_ttl_seconds, "Connected to Redis");

        Ok(Self {
            conn,
            default_ttl: default_ttl_seconds,
        })
    }

    fn namespaced(key: &str) -> String {
        format!("{KEY_NAMESPACE}:{key}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();

        let value = conn
            .get::<_, Option<String>>(Self::namespaced(key))
            .await
            .unwrap_or_else(|e| {
                warn!(key, error = %e, "Redis GET failed, treating as miss");
                None
            });

        debug!(key, hit = value.is_some(), "Cache lookup");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);

        if let Err(e) = conn
            .set_ex::<_, _, ()>(Self::namespaced(key), value, ttl)
            .await
        {
            warn!(key, error = %e, "Redis SET failed");
        } else {
            debug!(key, ttl, "Cache store");
        }

        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.conn.clone();

        match conn.del::<_, u32>(Self::namespaced(key)).await {
            Ok(removed) => debug!(key, removed, "Cache invalidate"),
            Err(e) => warn!(key, error = %e, "Redis DEL failed"),
        }

        Ok(())
    }

    async fn incr(&self, key: &str) -> CacheResult<Option<i64>> {
        let mut conn = self.conn.clone();

        match conn.incr::<_, _, i64>(Self::namespaced(key), 1).await {
            Ok(value) => {
                debug!(key, value, "Cache counter incremented");
                Ok(Some(value))
            }
            Err(e) => {
                warn!(key, error = %e, "Redis INCR failed");
                Ok(None)
            }
        }
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(
            RedisCache::namespaced("dict_type:gen"),
            "dict_admin:dict_type:gen"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisCache::connect("not a redis url", 60).await;

        assert!(matches!(result, Err(CacheError::Connection { .. })));
    }
}
