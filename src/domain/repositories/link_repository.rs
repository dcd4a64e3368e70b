//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// The link store: sole owner of all link records.
///
/// Every mutation is atomic with respect to concurrent callers. In
/// particular, two concurrent inserts of the same short code result in
/// exactly one success and one [`AppError::DuplicateCode`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Ensures the storage schema exists.
    ///
    /// Idempotent; safe to call on every process start.
    async fn initialize(&self) -> Result<(), AppError>;

    /// Persists a new link and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError>;

    /// Lists every link, newest first (id descending).
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Deletes a link by id.
    ///
    /// Returns `Ok(true)` if a record was removed, `Ok(false)` if nothing
    /// matched. A miss is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;

    /// Cheap round-trip used by health checks.
    async fn ping(&self) -> Result<(), AppError>;
}
