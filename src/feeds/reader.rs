use crate::feeds::FeedError;
use crate::fetcher;
use async_trait::async_trait;
use quick_xml::events::Event;

/// A pre-parsed feed entry as handed to the aggregation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub image: Option<String>,
}

/// Opaque feed-to-item converter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedReader: Send + Sync {
    async fn read(&self, feed_url: &str) -> Result<Vec<FeedItem>, FeedError>;
}

/// Reads RSS 2.0 feeds over HTTP with the shared client.
pub struct RssFeedReader;

#[async_trait]
impl FeedReader for RssFeedReader {
    async fn read(&self, feed_url: &str) -> Result<Vec<FeedItem>, FeedError> {
        let body = fetcher::fetch(feed_url).await?;
        Ok(parse_rss_items(&body))
    }
}

/// Parse RSS 2.0 `<item>` elements into feed items.
///
/// Items need a title and a link; an `<enclosure url="...">` becomes the
/// image. A parse error stops the scan and yields whatever was collected
/// up to that point, so malformed feeds degrade to fewer items rather than
/// an error.
pub fn parse_rss_items(xml: &str) -> Vec<FeedItem> {
    let mut items = Vec::new();
    let mut in_item = false;
    let mut current_title = String::new();
    let mut current_link = String::new();
    let mut current_image: Option<String> = None;
    let mut current_tag = String::new();

    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item" {
                    in_item = true;
                    current_title.clear();
                    current_link.clear();
                    current_image = None;
                }
                if in_item && name == "enclosure" {
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"url" {
                            current_image = Some(String::from_utf8_lossy(&attr.value).to_string());
                        }
                    }
                }
                current_tag = name;
            }
            Ok(Event::Text(ref e)) => {
                if in_item {
                    let text = e.decode().unwrap_or_default();
                    record_field(&current_tag, text.trim(), &mut current_title, &mut current_link);
                }
            }
            Ok(Event::CData(ref e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e).to_string();
                    record_field(&current_tag, text.trim(), &mut current_title, &mut current_link);
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name == "item" && in_item {
                    if !current_title.is_empty() && !current_link.is_empty() {
                        items.push(FeedItem {
                            title: current_title.clone(),
                            link: current_link.clone(),
                            image: current_image.clone(),
                        });
                    }
                    in_item = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }

    items
}

fn record_field(tag: &str, text: &str, title: &mut String, link: &mut String) {
    if text.is_empty() {
        return;
    }
    match tag {
        "title" => *title = text.to_string(),
        "link" => *link = text.to_string(),
        _ => {}
    }
}
