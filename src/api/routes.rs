//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, health_handler, list_links_handler, redirect_handler, shorten_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST   /shorten`     - Create a short link
/// - `GET    /links`       - List links, newest first
/// - `DELETE /links/{id}`  - Delete a link by id
/// - `GET    /health`      - Storage health check
/// - `GET    /{code}`      - Redirect to the stored URL
///
/// Fixed segments take precedence over `/{code}`; generated codes never
/// collide with them (see [`crate::utils::code_generator`]).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(list_links_handler))
        .route("/links/{id}", delete(delete_link_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
}
