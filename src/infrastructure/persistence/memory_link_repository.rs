//! In-memory implementation of the link repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

#[derive(Debug, Default)]
struct Inner {
    links: BTreeMap<i64, Link>,
    ids_by_code: HashMap<String, i64>,
    last_id: i64,
}

/// Process-local link store.
///
/// A single mutex guards the whole state, so check-and-insert is atomic and
/// ids keep increasing across deletions, matching the SQLite store. Nothing
/// survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    inner: Mutex<Inner>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // No operation can leave `Inner` half-updated, so a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn initialize(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.lock();

        if inner.ids_by_code.contains_key(&new_link.short_code) {
            return Err(AppError::DuplicateCode {
                code: new_link.short_code,
            });
        }

        inner.last_id += 1;
        let id = inner.last_id;
        let link = new_link.into_link(id);

        inner.ids_by_code.insert(link.short_code.clone(), id);
        inner.links.insert(id, link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let inner = self.lock();

        Ok(inner
            .ids_by_code
            .get(short_code)
            .and_then(|id| inner.links.get(id))
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        Ok(self.lock().links.values().rev().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let mut inner = self.lock();

        match inner.links.remove(&id) {
            Some(link) => {
                inner.ids_by_code.remove(&link.short_code);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
