//! Static category registry.
//!
//! The table of categories is immutable configuration, built once at startup
//! and injected into the retrieval service. Unknown identifiers are a typed
//! error, never a silent fallback: only an *omitted* category resolves to
//! the default.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("invalid category: {0}")]
pub struct InvalidCategory(pub String);

/// One registered category and the upstream path its listing lives at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub identifier: String,
    pub upstream_path: String,
}

pub struct CategoryRegistry {
    categories: HashMap<String, CategoryDescriptor>,
    default_category: String,
}

pub const DEFAULT_CATEGORY: &str = "politics";

const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("politics", "category/politics/"),
    ("education", "category/education/"),
    ("business", "category/business/"),
    ("economy", "category/economy/"),
    ("religion", "category/religion/"),
    ("jobs", "category/jobs/"),
    ("sports", "category/sports/"),
    ("world", "category/world/"),
];

impl CategoryRegistry {
    pub fn new(
        entries: impl IntoIterator<Item = (String, String)>,
        default_category: impl Into<String>,
    ) -> Self {
        let categories = entries
            .into_iter()
            .map(|(identifier, upstream_path)| {
                let identifier = identifier.to_ascii_lowercase();
                (
                    identifier.clone(),
                    CategoryDescriptor {
                        identifier,
                        upstream_path,
                    },
                )
            })
            .collect();
        Self {
            categories,
            default_category: default_category.into(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, path)| (id.to_string(), path.to_string())),
            DEFAULT_CATEGORY,
        )
    }

    /// Resolve a requested category to its descriptor.
    ///
    /// Lookup is case-normalized: identifiers are matched after ASCII
    /// lowercasing. `None` resolves to the default category; an unknown
    /// identifier is an [`InvalidCategory`] error.
    pub fn resolve(&self, requested: Option<&str>) -> Result<&CategoryDescriptor, InvalidCategory> {
        let identifier = match requested {
            Some(raw) => raw.to_ascii_lowercase(),
            None => self.default_category.clone(),
        };
        self.categories
            .get(&identifier)
            .ok_or(InvalidCategory(identifier))
    }
}
