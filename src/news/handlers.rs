use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    app_state::AppState,
    extractor::ArticleRecord,
    news::{dtos::NewsQuery, errors::NewsError},
};

pub async fn welcome() -> &'static str {
    "Welcome to the Newswire API!"
}

pub async fn get_news(
    State(state): State<AppState>,
    Query(query): Query<NewsQuery>,
) -> Result<Json<Vec<ArticleRecord>>, NewsError> {
    let records = state
        .news
        .get_articles(query.category.as_deref(), query.page.unwrap_or(1))
        .await?;
    Ok(Json(records.as_ref().clone()))
}
