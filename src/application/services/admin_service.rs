//! Link administration: listing and deletion.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Result of a delete request.
///
/// A missing id is a normal outcome reported to the caller, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// Administrative operations over the link store.
pub struct LinkAdminService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkAdminService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Lists every stored link, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Deletes the link with the given id.
    ///
    /// # Errors
    ///
    /// Only storage failures are errors; an unknown id yields
    /// [`DeleteOutcome::NotFound`].
    pub async fn delete_link(&self, id: i64) -> Result<DeleteOutcome, AppError> {
        if self.repository.delete_by_id(id).await? {
            tracing::info!(id, "Link deleted");
            Ok(DeleteOutcome::Deleted)
        } else {
            tracing::debug!(id, "Delete requested for unknown link");
            Ok(DeleteOutcome::NotFound)
        }
    }

    /// Checks that the store is reachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
