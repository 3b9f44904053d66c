//! HTTP server for ollabenchd

use crate::routes;
use crate::tools::ToolRegistry;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub registry: Arc<ToolRegistry>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            start_time: Instant::now(),
        }
    }
}

/// Build the router. Split out of `run` so tests can drive it in-process.
pub fn app(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .merge(routes::benchmark_routes())
        .merge(routes::health_routes())
        .route_service("/", ServeFile::new(format!("{static_dir}/index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(addr: &str, static_dir: &str) -> Result<()> {
    let state = Arc::new(AppState::new(ToolRegistry::new()));
    let app = app(state, static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
