use super::handlers::{AppState, health, send_image, send_test_card};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Requests carry a short text only.
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/test", get(send_test_card))
        .route("/send-image", post(send_image))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
                .layer(CorsLayer::permissive()),
        )
}

pub async fn create_server(state: Arc<AppState>, host: &str, port: u16) -> anyhow::Result<()> {
    info!("Starting text-card-notifier web server...");

    // Parse socket address
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = TcpListener::bind(&addr).await?;

    info!("Web server listening on http://{addr}");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
