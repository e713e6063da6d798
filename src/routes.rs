use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{app_state::AppState, feeds, health, identity, news};

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(news::handlers::welcome))
        .route("/news", get(news::handlers::get_news))
        .route("/google-news", get(feeds::handlers::get_google_news))
        .route("/login", post(identity::handlers::login))
        .route("/healthz", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
