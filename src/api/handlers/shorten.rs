//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "short_url": "http://localhost:8000/aB3xY9" }
/// ```
///
/// # Errors
///
/// Returns 422 Unprocessable Entity if the body is malformed or `url` is not
/// an `http(s)` URL. Returns 500 if the link cannot be stored.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.shorten_service.shorten(&payload.url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: state.short_url(&link.short_code),
        }),
    ))
}
