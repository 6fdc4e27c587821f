//! Router configuration for the web server.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use yomu_config::server::ServerConfig;

use crate::handlers;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, server: &ServerConfig) -> anyhow::Result<Router> {
    Ok(Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        // OCR; the frontend posts to receive-image
        .route("/api/scan/translate", post(handlers::scan::translate))
        .route("/api/scan/receive-image", post(handlers::scan::translate))
        // Dictionary
        .route("/api/search/kanji/:term", get(handlers::search::kanji))
        .route("/api/search/general", post(handlers::search::general))
        .with_state(state)
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(cors_layer(server)?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(server: &ServerConfig) -> anyhow::Result<CorsLayer> {
    if server.allows_any_origin() {
        anyhow::bail!("wildcard CORS origin cannot be combined with credentials");
    }

    let origins = server
        .cors_origins
        .iter()
        .map(|o| HeaderValue::from_str(o))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}
