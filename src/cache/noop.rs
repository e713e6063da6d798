use super::store::{CacheError, CacheStore};
use async_trait::async_trait;
use std::time::Duration;

/// Always-miss store.
///
/// Used as the degraded mode when no cache backend is configured or the
/// configured backend could not be reached at startup: every request falls
/// through to the upstream fetch instead of failing.
pub struct NoopCache;

#[async_trait]
impl CacheStore for NoopCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _payload: &str, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }

    async fn exists(&self, _key: &str) -> Result<bool, CacheError> {
        Ok(false)
    }
}
