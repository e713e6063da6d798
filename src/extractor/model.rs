use serde::{Deserialize, Serialize};

/// Sentinel image value for article units that carry no image reference.
pub const DEFAULT_IMAGE: &str = "default.jpg";

/// A single article as it appears on an upstream category listing page.
///
/// Records are cached as JSON, so the shape here is also the cache payload
/// shape. No uniqueness is assumed; if upstream repeats an entry we repeat
/// it too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub link: String,
    pub image: String,
}
