//! Handlers for link administration endpoints (list, delete).

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::json;

use crate::api::dto::links::{LinkItem, MessageResponse};
use crate::application::services::DeleteOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link, newest first.
///
/// # Endpoint
///
/// `GET /links`
///
/// # Response
///
/// ```json
/// [
///   { "id": 2, "full_url": "https://b.com", "short_url": "http://localhost:8000/Xy12Ab" },
///   { "id": 1, "full_url": "https://a.com", "short_url": "http://localhost:8000/Qw34Er" }
/// ]
/// ```
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.admin_service.list_links().await?;

    let items = links
        .into_iter()
        .map(|link| LinkItem {
            short_url: state.short_url(&link.short_code),
            id: link.id,
            full_url: link.full_url,
        })
        .collect();

    Ok(Json(items))
}

/// Permanently deletes a link by id.
///
/// # Endpoint
///
/// `DELETE /links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has this id.
/// Returns 422 Unprocessable Entity if `id` is not an integer.
pub async fn delete_link_handler(
    id: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path(id) = id?;

    match state.admin_service.delete_link(id).await? {
        DeleteOutcome::Deleted => Ok(Json(MessageResponse {
            message: "Deleted successfully".to_string(),
        })),
        DeleteOutcome::NotFound => Err(AppError::not_found(
            "Link not found",
            json!({ "id": id }),
        )),
    }
}
