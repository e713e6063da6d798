use async_trait::async_trait;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use newswire::{
    app_state::AppState,
    cache::CacheStore,
    feeds::{FeedError, FeedItem, FeedReader, FeedRegistry},
    fetcher::FetchError,
    identity::StaticIdentityProvider,
    news::NewsService,
    registry::CategoryRegistry,
    routes,
};

pub fn news_service(base_url: &str, ttl: Duration, store: Arc<dyn CacheStore>) -> NewsService {
    NewsService::new(
        CategoryRegistry::with_defaults(),
        store,
        Url::parse(base_url).expect("invalid test base url"),
        ttl,
    )
}

pub struct StubFeedReader(pub Vec<FeedItem>);

#[async_trait]
impl FeedReader for StubFeedReader {
    async fn read(&self, _feed_url: &str) -> Result<Vec<FeedItem>, FeedError> {
        Ok(self.0.clone())
    }
}

pub struct FailingFeedReader;

#[async_trait]
impl FeedReader for FailingFeedReader {
    async fn read(&self, _feed_url: &str) -> Result<Vec<FeedItem>, FeedError> {
        Err(FeedError::Fetch(FetchError::RequestTimeout))
    }
}

pub fn test_app(
    base_url: &str,
    store: Arc<dyn CacheStore>,
    feed_reader: Arc<dyn FeedReader>,
    demo_emails: Vec<String>,
) -> Router {
    let state = AppState {
        news: Arc::new(news_service(
            base_url,
            Duration::from_secs(60),
            Arc::clone(&store),
        )),
        feeds: Arc::new(FeedRegistry::with_defaults()),
        feed_reader,
        identity: Arc::new(StaticIdentityProvider::new(demo_emails)),
        cache: store,
    };
    routes::api_router(state)
}

pub fn article_unit(title: &str, link: &str, image: Option<&str>) -> String {
    let img = image
        .map(|src| format!(r#"<img src="{src}" />"#))
        .unwrap_or_default();
    format!(
        r#"<div class="td-module-container">
             <h3 class="entry-title"><a href="{link}">{title}</a></h3>
             {img}
           </div>"#
    )
}

pub fn listing_page(units: &[String]) -> String {
    format!("<html><body>{}</body></html>", units.join("\n"))
}
