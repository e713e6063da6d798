//! Feed aggregation collaborator.
//!
//! Feeds are outside the cached retrieval core: categories map through
//! their own static registry, and an unknown or omitted category falls
//! back to the general feed instead of erroring.

pub mod handlers;
pub mod reader;

pub use reader::{FeedItem, FeedReader, RssFeedReader};

use crate::fetcher::FetchError;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("feed fetch failed: {0}")]
    Fetch(#[from] FetchError),
}

const GENERAL_FEED: &str = "general";

const DEFAULT_FEEDS: &[(&str, &str)] = &[
    (
        "general",
        "https://news.google.com/rss?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "politics",
        "https://news.google.com/rss/headlines/section/topic/NATION?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "education",
        "https://news.google.com/rss/search?q=Education&hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "world",
        "https://news.google.com/rss/headlines/section/topic/WORLD?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "business",
        "https://news.google.com/rss/headlines/section/topic/BUSINESS?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "technology",
        "https://news.google.com/rss/headlines/section/topic/TECHNOLOGY?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "sports",
        "https://news.google.com/rss/headlines/section/topic/SPORTS?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "science",
        "https://news.google.com/rss/headlines/section/topic/SCIENCE?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "entertainment",
        "https://news.google.com/rss/headlines/section/topic/ENTERTAINMENT?hl=en-IN&gl=IN&ceid=IN:en",
    ),
    (
        "health",
        "https://news.google.com/rss/headlines/section/topic/HEALTH?hl=en-IN&gl=IN&ceid=IN:en",
    ),
];

/// Static map from category to feed URL, loaded once at startup.
pub struct FeedRegistry {
    feeds: HashMap<String, String>,
}

impl FeedRegistry {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        let feeds = entries
            .into_iter()
            .map(|(id, url)| (id.to_ascii_lowercase(), url))
            .collect();
        Self { feeds }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_FEEDS
                .iter()
                .map(|(id, url)| (id.to_string(), url.to_string())),
        )
    }

    /// Resolve a category to its feed URL, falling back to the general feed
    /// for an unknown or omitted category.
    pub fn resolve(&self, requested: Option<&str>) -> &str {
        requested
            .map(|raw| raw.to_ascii_lowercase())
            .and_then(|id| self.feeds.get(&id))
            .map(String::as_str)
            .unwrap_or_else(|| {
                self.feeds
                    .get(GENERAL_FEED)
                    .map(String::as_str)
                    .expect("feed registry missing general feed")
            })
    }
}
