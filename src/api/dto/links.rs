//! DTOs for link administration endpoints.

use serde::Serialize;

/// One entry of `GET /links`.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub full_url: String,
    pub short_url: String,
}

/// Confirmation body returned by `DELETE /links/{id}`.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
