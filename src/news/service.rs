use crate::cache::{CacheStore, FetchCoordinator};
use crate::extractor::{ArticleRecord, extract_articles};
use crate::fetcher;
use crate::news::errors::NewsError;
use crate::registry::{CategoryDescriptor, CategoryRegistry};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;
use url::Url;

/// End-to-end "get articles for category/page" operation.
///
/// Composes the category registry, the single-flight coordinator, the
/// upstream fetcher and the extractor. All consistency guarantees live in
/// the coordinator; this type only validates input and builds URLs and
/// cache keys.
pub struct NewsService {
    registry: CategoryRegistry,
    coordinator: FetchCoordinator<Vec<ArticleRecord>, NewsError>,
    base_url: Url,
}

impl NewsService {
    pub fn new(
        registry: CategoryRegistry,
        store: Arc<dyn CacheStore>,
        base_url: Url,
        ttl: Duration,
    ) -> Self {
        Self {
            registry,
            coordinator: FetchCoordinator::new(store, ttl),
            base_url,
        }
    }

    /// Cache key for a `(category, page)` pair.
    ///
    /// Deterministic and collision-free: identifiers never contain `:`, so
    /// distinct pairs always map to distinct keys.
    pub fn cache_key(category: &str, page: u32) -> String {
        format!("{category}:{page}")
    }

    /// Fetch the article listing for a category page, serving from cache
    /// when possible.
    ///
    /// `None` for the category selects the default; an unknown identifier
    /// is `InvalidCategory` and triggers no upstream traffic. An empty
    /// extraction result is a valid success.
    #[instrument(skip(self))]
    pub async fn get_articles(
        &self,
        category: Option<&str>,
        page: u32,
    ) -> Result<Arc<Vec<ArticleRecord>>, NewsError> {
        if page == 0 {
            return Err(NewsError::InvalidPage);
        }
        let descriptor = self.registry.resolve(category)?;
        let key = Self::cache_key(&descriptor.identifier, page);
        let url = self.page_url(descriptor, page)?;

        self.coordinator
            .resolve(&key, move || async move {
                let body = fetcher::fetch(url.as_str()).await?;
                Ok(extract_articles(&body))
            })
            .await
    }

    fn page_url(&self, descriptor: &CategoryDescriptor, page: u32) -> Result<Url, NewsError> {
        let mut url = self.base_url.join(&descriptor.upstream_path).map_err(|err| {
            NewsError::Internal(format!(
                "bad upstream path for category {}: {err}",
                descriptor.identifier
            ))
        })?;
        url.set_query(Some(&format!("page={page}")));
        Ok(url)
    }
}
