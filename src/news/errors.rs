use crate::fetcher::FetchError;
use crate::news::dtos::ErrorResponse;
use crate::registry::InvalidCategory;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

/// Request-level failures for the retrieval service.
///
/// `Clone` on purpose: a single in-flight fetch can fail for many waiters
/// at once, and each of them gets the same error. Detail stays as strings
/// for that reason; it is logged at the response boundary and never leaked
/// to the caller for server-side failures.
#[derive(Debug, Clone, Error)]
pub enum NewsError {
    #[error("invalid category: {0}")]
    InvalidCategory(String),

    #[error("page must be a positive integer")]
    InvalidPage,

    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<InvalidCategory> for NewsError {
    fn from(err: InvalidCategory) -> Self {
        Self::InvalidCategory(err.0)
    }
}

impl From<FetchError> for NewsError {
    fn from(err: FetchError) -> Self {
        Self::UpstreamUnavailable(err.to_string())
    }
}

impl From<tokio::task::JoinError> for NewsError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Internal(format!("fetch task failed: {err}"))
    }
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidCategory(_) | Self::InvalidPage => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::UpstreamUnavailable(detail) => {
                error!(%detail, "upstream fetch failed");
                (StatusCode::BAD_GATEWAY, "Failed to fetch news.".to_string())
            }
            Self::Internal(detail) => {
                error!(%detail, "internal failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
