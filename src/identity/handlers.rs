use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::error;

use crate::{app_state::AppState, identity::UserRecord, news::dtos::ErrorResponse};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: UserRecord,
}

fn invalid_credentials() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Invalid credentials".to_string(),
        }),
    )
        .into_response()
}

pub async fn login(State(state): State<AppState>, Json(payload): Json<LoginRequest>) -> Response {
    if !EMAIL_REGEX.is_match(&payload.email) {
        return invalid_credentials();
    }

    match state.identity.find_by_email(&payload.email).await {
        Ok(Some(user)) => Json(LoginResponse {
            success: true,
            user,
        })
        .into_response(),
        Ok(None) => invalid_credentials(),
        Err(err) => {
            error!(%err, "identity lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cache::{CacheStore, MemoryCache},
        feeds::{FeedRegistry, RssFeedReader},
        identity::{IdentityError, MockIdentityProvider},
        news::NewsService,
        registry::CategoryRegistry,
    };
    use axum::{Router, body::Body, http::Request, routing::post};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;
    use url::Url;

    fn test_app(provider: MockIdentityProvider) -> Router {
        let cache: Arc<dyn CacheStore> = Arc::new(MemoryCache::new());
        let state = AppState {
            news: Arc::new(NewsService::new(
                CategoryRegistry::with_defaults(),
                Arc::clone(&cache),
                Url::parse("http://127.0.0.1:1/").unwrap(),
                Duration::from_secs(60),
            )),
            feeds: Arc::new(FeedRegistry::with_defaults()),
            feed_reader: Arc::new(RssFeedReader),
            identity: Arc::new(provider),
            cache,
        };

        Router::new().route("/login", post(login)).with_state(state)
    }

    fn login_request(email: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/login")
            .header("content-type", "application/json")
            .body(Body::from(format!(r#"{{"email":"{email}"}}"#)))
            .unwrap()
    }

    #[tokio::test]
    async fn backend_failure_is_a_generic_server_error() {
        let mut provider = MockIdentityProvider::new();
        provider
            .expect_find_by_email()
            .returning(|_| Err(IdentityError::Unavailable("connection reset".to_string())));

        let response = test_app(provider)
            .oneshot(login_request("reader@example.com"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn malformed_email_never_reaches_the_backend() {
        let mut provider = MockIdentityProvider::new();
        provider.expect_find_by_email().never();

        let response = test_app(provider)
            .oneshot(login_request("not-an-email"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
