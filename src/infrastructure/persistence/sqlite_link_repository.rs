//! SQLite implementation of the link repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

#[derive(Debug, sqlx::FromRow)]
struct LinkRow {
    id: i64,
    full_url: String,
    short_code: String,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.id, row.full_url, row.short_code)
    }
}

/// SQLite repository for link storage and retrieval.
///
/// Uniqueness of `short_code` is enforced by a UNIQUE constraint, and ids
/// come from an `AUTOINCREMENT` primary key so they are never reused.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn initialize(&self) -> Result<(), AppError> {
        MIGRATOR.run(self.pool.as_ref()).await?;
        Ok(())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let result = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (full_url, short_code)
            VALUES (?, ?)
            RETURNING id, full_url, short_code
            "#,
        )
        .bind(&new_link.full_url)
        .bind(&new_link.short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(row) => Ok(row.into()),
            Err(e) if is_unique_violation_on_code(&e) => Err(AppError::DuplicateCode {
                code: new_link.short_code,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            "SELECT id, full_url, short_code FROM links WHERE short_code = ?",
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            "SELECT id, full_url, short_code FROM links ORDER BY id DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM links WHERE id = ?")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
