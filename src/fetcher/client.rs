use crate::fetcher::errors::FetchError;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::instrument;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB
const USER_AGENT: &str = "NewswireBot/0.1 (+https://newswire.example.com)";

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                    .parse()
                    .unwrap(),
            );
            headers
        })
        .build()
        .expect("Failed to build HTTP client")
});

/// Fetch a page body as text.
///
/// Bounded by the client's connect and request timeouts; a non-2xx status
/// is an error, as is a body over [`MAX_BODY_SIZE`]. No retries are
/// performed here.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch(url: &str) -> Result<String, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = HTTP_CLIENT
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    // Check content length before downloading
    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Check body size after download (in case Content-Length was missing)
    if body.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body.len() as u64));
    }

    Ok(body)
}
