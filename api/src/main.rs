//! FormGenie API - Main Entry Point

use genie_api::config::ApiConfig;
use genie_api::{build_router, build_state};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("FormGenie API v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::from_env();
    let addr = config.bind_addr.clone();
    if config.notify_url.is_none() {
        tracing::warn!("GENIE_NOTIFY_URL not set, owner notifications disabled");
    }

    let app = build_router(build_state(config));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
