use super::store::{CacheError, CacheStore};
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Entry {
    payload: String,
    expires_at: Instant,
}

/// In-process cache with lazy per-key expiry.
///
/// Entries are dropped on the read path once their deadline has passed;
/// there is no background sweep. Last write wins for a key.
#[derive(Default)]
pub struct MemoryCache {
    entries: DashMap<String, Entry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key)
            && entry.expires_at > now
        {
            return Ok(Some(entry.payload.clone()));
        }
        self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        Ok(None)
    }

    async fn set(&self, key: &str, payload: &str, ttl: Duration) -> Result<(), CacheError> {
        self.entries.insert(
            key.to_string(),
            Entry {
                payload: payload.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let now = Instant::now();
        let alive = self
            .entries
            .get(key)
            .map(|entry| entry.expires_at > now)
            .unwrap_or(false);
        if !alive {
            self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
        }
        Ok(alive)
    }
}
