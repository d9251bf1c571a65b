use axum::{
    routing::{any, get},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::proxy::{handlers, Upstream};

/// Health check, the API proxy, and the built frontend for everything else
pub fn configure_routes(upstream: Upstream, static_dir: &str) -> Router {
    // client-side routes like /admin resolve to the app shell
    let index = ServeFile::new(std::path::Path::new(static_dir).join("index.html"));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/items",
            get(handlers::list_items).post(handlers::forward),
        )
        .route("/api/*path", any(handlers::forward))
        .fallback_service(ServeDir::new(static_dir).fallback(index))
        .with_state(upstream)
}
