use anyhow::Result;
use newswire::{
    app_state::AppState,
    config::Config,
    middleware::{RateLimit, rate_limit_middleware},
    routes,
};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;

    let rate_limit = RateLimit::new(
        config.rate_limit_max_requests(),
        config.rate_limit_window_secs(),
    );
    let app = routes::api_router(state).layer(axum::middleware::from_fn_with_state(
        rate_limit,
        rate_limit_middleware,
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = config.bind_addr(), "newswire listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
