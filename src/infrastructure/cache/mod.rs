//! Caching layer for the option-select dictionary type list.
//!
//! [`CacheService`] has two implementations: [`RedisCache`] when `REDIS_URL`
//! is configured and reachable, [`NullCache`] otherwise.

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
