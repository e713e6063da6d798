use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {0}")]
    Unavailable(String),
}

/// Key-value store with per-entry expiry.
///
/// `get` must report a miss once the entry's TTL has elapsed, even if no
/// eviction ran. Writes replace the whole value for a key, so a reader never
/// observes a partial payload. Callers are expected to tolerate
/// [`CacheError`] by falling through to the upstream fetch.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), CacheError>;
    async fn exists(&self, key: &str) -> Result<bool, CacheError>;
}
