//! Short code resolution.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Resolves short codes to their target URLs.
///
/// A pure read against the link store: no caching and no mutation, so every
/// lookup sees the latest committed state.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Returns the full URL stored for `short_code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued or has been deleted.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        match self.repository.find_by_code(short_code).await? {
            Some(link) => {
                tracing::info!(code = %short_code, url = %link.full_url, "Redirecting");
                Ok(link.full_url)
            }
            None => {
                tracing::warn!(code = %short_code, "Unknown short code requested");
                Err(AppError::not_found(
                    "Short link not found",
                    json!({ "code": short_code }),
                ))
            }
        }
    }
}
