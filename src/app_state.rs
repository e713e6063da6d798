use crate::cache::{CacheStore, MemoryCache, NoopCache};
use crate::config::Config;
use crate::feeds::{FeedReader, FeedRegistry, RssFeedReader};
use crate::identity::{IdentityProvider, StaticIdentityProvider};
use crate::news::NewsService;
use crate::registry::CategoryRegistry;
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use url::Url;

#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsService>,
    pub feeds: Arc<FeedRegistry>,
    pub feed_reader: Arc<dyn FeedReader>,
    pub identity: Arc<dyn IdentityProvider>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self> {
        let base_url =
            Url::parse(config.upstream_base_url()).context("invalid upstream base URL")?;
        let cache = build_cache(config.cache_backend());
        let news = NewsService::new(
            CategoryRegistry::with_defaults(),
            Arc::clone(&cache),
            base_url,
            Duration::from_secs(config.cache_ttl_secs()),
        );

        Ok(Self {
            news: Arc::new(news),
            feeds: Arc::new(FeedRegistry::with_defaults()),
            feed_reader: Arc::new(RssFeedReader),
            identity: Arc::new(StaticIdentityProvider::new(config.demo_user_emails())),
            cache,
        })
    }
}

fn build_cache(backend: &str) -> Arc<dyn CacheStore> {
    match backend {
        "memory" => Arc::new(MemoryCache::new()),
        "off" => {
            warn!("cache disabled, running in always-miss mode");
            Arc::new(NoopCache)
        }
        other => {
            warn!(backend = other, "unknown cache backend, running in always-miss mode");
            Arc::new(NoopCache)
        }
    }
}
