//! Short link creation service.

use std::sync::Arc;

use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, is_reserved_code};
use crate::utils::url_validator::validate_http_url;

/// Default number of retries after the first collision.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Creates short links by pairing a [`CodeGenerator`] with the link store.
///
/// Collisions are detected by the store itself, never by a prior lookup, so
/// several service instances can share one database safely. A colliding
/// candidate is replaced by a fresh one, at most `max_retries` times.
pub struct ShortenService {
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn CodeGenerator>,
    max_retries: u32,
}

impl ShortenService {
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        generator: Arc<dyn CodeGenerator>,
        max_retries: u32,
    ) -> Self {
        Self {
            repository,
            generator,
            max_retries,
        }
    }

    /// Shortens `full_url` and returns the stored link.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if `full_url` is not a well-formed `http(s)` URL
    /// - [`AppError::ExhaustedRetries`] if every candidate code collided
    /// - [`AppError::Internal`] on storage errors
    pub async fn shorten(&self, full_url: &str) -> Result<Link, AppError> {
        let full_url = validate_http_url(full_url).map_err(|e| {
            AppError::validation(
                "Invalid URL. Make sure the link starts with http:// or https://",
                json!({ "reason": e.to_string() }),
            )
        })?;

        let strategy = FixedInterval::from_millis(0).take(self.max_retries as usize);
        let result = RetryIf::start(
            strategy,
            || self.try_insert(full_url),
            |e: &AppError| e.is_duplicate_code(),
        )
        .await;

        match result {
            Ok(link) => {
                tracing::info!(
                    id = link.id,
                    code = %link.short_code,
                    url = %link.full_url,
                    "URL shortened"
                );
                Ok(link)
            }
            Err(AppError::DuplicateCode { code }) => {
                let attempts = self.max_retries + 1;
                tracing::warn!(
                    attempts,
                    last_code = %code,
                    "Short code collisions exhausted all retries"
                );
                Err(AppError::ExhaustedRetries { attempts })
            }
            Err(e) => Err(e),
        }
    }

    /// One allocation attempt with a fresh candidate code.
    async fn try_insert(&self, full_url: &str) -> Result<Link, AppError> {
        let code = self.generator.generate();

        if is_reserved_code(&code) {
            tracing::debug!(%code, "Generated code is reserved, retrying");
            return Err(AppError::DuplicateCode { code });
        }

        let result = self
            .repository
            .insert(NewLink::new(full_url, code.as_str()))
            .await;

        if result.as_ref().is_err_and(AppError::is_duplicate_code) {
            tracing::debug!(%code, "Short code collision, retrying");
        }

        result
    }
}
