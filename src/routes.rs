//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`           - Front page (`main.html` from the static directory)
//! - `/static/*`        - Static assets
//! - everything else    - REST API, see [`crate::api::routes::routes`]
//!
//! # Middleware
//!
//! - **CORS** - Configured origins only, credentials allowed
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `allowed_origins` - origins accepted by the CORS layer
/// - `static_dir` - directory holding `main.html` and other assets
pub fn app_router(
    state: AppState,
    allowed_origins: &[String],
    static_dir: &Path,
) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .route_service("/", ServeFile::new(static_dir.join("main.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors::layer(allowed_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
