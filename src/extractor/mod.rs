pub mod model;

pub use model::{ArticleRecord, DEFAULT_IMAGE};

use scraper::{Html, Selector};
use std::sync::LazyLock;

static ARTICLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".td-module-container").expect("Failed to compile article selector")
});

static TITLE_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(".entry-title a").expect("Failed to compile title link selector")
});

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("img").expect("Failed to compile image selector"));

/// Extract article records from a category listing page.
///
/// The page is a repeating sequence of `.td-module-container` units, each
/// holding an `.entry-title a` anchor and optionally an `img`. Units missing
/// the title or the link are skipped. A missing image falls back to
/// [`DEFAULT_IMAGE`]. Output preserves document order. Markup the parser
/// cannot make sense of yields an empty vec, never an error.
pub fn extract_articles(html: &str) -> Vec<ArticleRecord> {
    let document = Html::parse_document(html);
    let mut articles = Vec::new();

    for container in document.select(&ARTICLE_SELECTOR) {
        let Some(anchor) = container.select(&TITLE_LINK_SELECTOR).next() else {
            continue;
        };
        let title = anchor.text().collect::<String>().trim().to_string();
        let Some(link) = anchor.value().attr("href") else {
            continue;
        };
        if title.is_empty() || link.is_empty() {
            continue;
        }

        let image = container
            .select(&IMAGE_SELECTOR)
            .next()
            .and_then(|img| img.value().attr("src"))
            .unwrap_or(DEFAULT_IMAGE)
            .to_string();

        articles.push(ArticleRecord {
            title,
            link: link.to_string(),
            image,
        });
    }

    articles
}
