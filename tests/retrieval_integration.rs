mod helpers;

use helpers::{article_unit, listing_page, news_service};
use newswire::cache::{MemoryCache, NoopCache};
use newswire::news::NewsError;
use std::sync::Arc;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn politics_page() -> String {
    listing_page(&[
        article_unit("First", "https://example.com/1", Some("1.jpg")),
        article_unit("Second", "https://example.com/2", None),
    ])
}

#[tokio::test]
async fn second_request_within_ttl_issues_no_second_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/politics/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(politics_page()))
        .expect(1)
        .mount(&server)
        .await;

    let service = news_service(
        &server.uri(),
        Duration::from_secs(60),
        Arc::new(MemoryCache::new()),
    );

    let first = service.get_articles(None, 1).await.unwrap();
    let second = service.get_articles(None, 1).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_cold_cache_requests_fetch_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/world/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(politics_page())
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = Arc::new(news_service(
        &server.uri(),
        Duration::from_secs(60),
        Arc::new(MemoryCache::new()),
    ));

    let mut handles = Vec::new();
    for _ in 0..12 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service.get_articles(Some("world"), 1).await
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap().unwrap());
    }

    let first = &results[0];
    assert!(results.iter().all(|r| r == first));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn expired_entry_is_refetched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/politics/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(politics_page()))
        .expect(2)
        .mount(&server)
        .await;

    let service = news_service(
        &server.uri(),
        Duration::from_millis(100),
        Arc::new(MemoryCache::new()),
    );

    service.get_articles(None, 1).await.unwrap();
    tokio::time::sleep(Duration::from_millis(250)).await;
    service.get_articles(None, 1).await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn invalid_category_triggers_no_upstream_traffic() {
    let server = MockServer::start().await;

    let service = news_service(
        &server.uri(),
        Duration::from_secs(60),
        Arc::new(MemoryCache::new()),
    );

    let err = service.get_articles(Some("weather"), 1).await.unwrap_err();
    assert!(matches!(err, NewsError::InvalidCategory(id) if id == "weather"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn jobs_page_two_end_to_end() {
    let malformed = r#"<div class="td-module-container"><p>no anchor here</p></div>"#.to_string();
    let body = listing_page(&[
        article_unit("Opening A", "https://example.com/a", Some("a.jpg")),
        article_unit("Opening B", "https://example.com/b", None),
        malformed,
        article_unit("Opening C", "https://example.com/c", Some("c.jpg")),
    ]);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/jobs/"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let service = news_service(
        &server.uri(),
        Duration::from_secs(60),
        Arc::new(MemoryCache::new()),
    );

    let first = service.get_articles(Some("jobs"), 2).await.unwrap();
    assert_eq!(first.len(), 3);
    let titles: Vec<&str> = first.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Opening A", "Opening B", "Opening C"]);

    let second = service.get_articles(Some("jobs"), 2).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn upstream_failure_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/politics/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = news_service(
        &server.uri(),
        Duration::from_secs(60),
        Arc::new(MemoryCache::new()),
    );

    let err = service.get_articles(None, 1).await.unwrap_err();
    assert!(matches!(err, NewsError::UpstreamUnavailable(_)));

    // Upstream recovers; the earlier failure must not be served from cache.
    server.reset().await;
    Mock::given(method("GET"))
        .and(path("/category/politics/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(politics_page()))
        .expect(1)
        .mount(&server)
        .await;

    let records = service.get_articles(None, 1).await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn always_miss_store_fetches_every_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/politics/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(politics_page()))
        .expect(2)
        .mount(&server)
        .await;

    let service = news_service(&server.uri(), Duration::from_secs(60), Arc::new(NoopCache));

    service.get_articles(None, 1).await.unwrap();
    service.get_articles(None, 1).await.unwrap();

    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_extraction_is_a_valid_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/politics/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let service = news_service(
        &server.uri(),
        Duration::from_secs(60),
        Arc::new(MemoryCache::new()),
    );

    let records = service.get_articles(None, 1).await.unwrap();
    assert!(records.is_empty());
}
