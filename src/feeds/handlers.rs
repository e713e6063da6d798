use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use crate::{
    app_state::AppState,
    extractor::{ArticleRecord, DEFAULT_IMAGE},
    news::dtos::ErrorResponse,
};

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub category: Option<String>,
}

pub async fn get_google_news(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> Response {
    let feed_url = state.feeds.resolve(query.category.as_deref());

    match state.feed_reader.read(feed_url).await {
        Ok(items) => {
            let articles: Vec<ArticleRecord> = items
                .into_iter()
                .map(|item| ArticleRecord {
                    title: item.title,
                    link: item.link,
                    image: item.image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
                })
                .collect();
            Json(articles).into_response()
        }
        Err(err) => {
            error!(%err, "feed fetch failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Failed to fetch Google News".to_string(),
                }),
            )
                .into_response()
        }
    }
}
