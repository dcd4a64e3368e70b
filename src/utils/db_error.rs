//! Helpers for classifying SQLx errors.

/// Returns true when `e` is a UNIQUE violation on `links.short_code`.
///
/// SQLite does not report constraint names, so the column is matched on the
/// driver message (`UNIQUE constraint failed: links.short_code`).
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("short_code")
}
