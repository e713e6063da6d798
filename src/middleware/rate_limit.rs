use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::{collections::VecDeque, net::SocketAddr, sync::Arc};

use crate::news::dtos::ErrorResponse;

/// Per-client sliding-window rate limiter.
///
/// Each client address keeps the timestamps of its admitted requests over
/// the last window; a request is admitted only while fewer than
/// `max_requests` of them fall inside the window ending now. Rejected
/// requests are not counted against the client.
#[derive(Clone)]
pub struct RateLimit {
    hits: Arc<DashMap<String, VecDeque<DateTime<Utc>>>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimit {
    pub fn new(max_requests: u32, window_seconds: i64) -> Self {
        Self {
            hits: Arc::new(DashMap::new()),
            max_requests,
            window: Duration::seconds(window_seconds),
        }
    }

    /// Record a request from `client` at `now` and decide whether it is
    /// within the limit. Timestamps that have slid out of the window are
    /// pruned on the way.
    fn admit(&self, client: &str, now: DateTime<Utc>) -> bool {
        let mut hits = self.hits.entry(client.to_string()).or_default();
        let cutoff = now - self.window;
        while hits.front().is_some_and(|earlier| *earlier <= cutoff) {
            hits.pop_front();
        }
        if hits.len() as u32 >= self.max_requests {
            return false;
        }
        hits.push_back(now);
        true
    }
}

pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(rate_limit): State<RateLimit>,
    req: Request,
    next: Next,
) -> Response {
    if !rate_limit.admit(&addr.ip().to_string(), Utc::now()) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                error: "Rate limit exceeded".to_string(),
            }),
        )
            .into_response();
    }

    next.run(req).await
}
