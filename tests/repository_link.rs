mod common;

use linkcut::domain::entities::NewLink;
use linkcut::domain::repositories::LinkRepository;
use linkcut::error::AppError;
use linkcut::infrastructure::persistence::SqliteLinkRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

#[sqlx::test]
async fn test_insert_link(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let result = repo
        .insert(NewLink::new("https://example.com", "abc123"))
        .await;

    assert!(result.is_ok());
    let link = result.unwrap();
    assert!(link.id > 0);
    assert_eq!(link.short_code, "abc123");
    assert_eq!(link.full_url, "https://example.com");
}

#[sqlx::test]
async fn test_insert_duplicate_code(pool: SqlitePool) {
    common::create_test_link(&pool, "dup123", "https://first.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    let result = repo
        .insert(NewLink::new("https://second.com", "dup123"))
        .await;

    assert!(matches!(result, Err(AppError::DuplicateCode { .. })));
    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_unique_violation_outside_insert_is_internal(pool: SqlitePool) {
    common::create_test_link(&pool, "raw123", "https://first.com").await;

    let err = sqlx::query("INSERT INTO links (full_url, short_code) VALUES (?, ?)")
        .bind("https://second.com")
        .bind("raw123")
        .execute(&pool)
        .await
        .unwrap_err();

    assert!(matches!(AppError::from(err), AppError::Internal { .. }));
}

#[sqlx::test]
async fn test_same_url_gets_independent_links(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let first = repo
        .insert(NewLink::new("https://example.com", "aaaaaa"))
        .await
        .unwrap();
    let second = repo
        .insert(NewLink::new("https://example.com", "bbbbbb"))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[sqlx::test]
async fn test_find_by_code(pool: SqlitePool) {
    common::create_test_link(&pool, "find12", "https://example.com/page").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("find12").await.unwrap();

    assert!(link.is_some());
    assert_eq!(link.unwrap().full_url, "https://example.com/page");
}

#[sqlx::test]
async fn test_find_by_code_is_case_sensitive(pool: SqlitePool) {
    common::create_test_link(&pool, "AbCdEf", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_code("abcdef").await.unwrap().is_none());
    assert!(repo.find_by_code("AbCdEf").await.unwrap().is_some());
}

#[sqlx::test]
async fn test_find_by_code_not_found(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_code("nonexistent").await.unwrap();

    assert!(link.is_none());
}

#[sqlx::test]
async fn test_list_all_newest_first(pool: SqlitePool) {
    let first = common::create_test_link(&pool, "first1", "https://a.com").await;
    let second = common::create_test_link(&pool, "secnd2", "https://b.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    let links = repo.list_all().await.unwrap();

    assert_eq!(links.len(), 2);
    assert_eq!(links[0].id, second);
    assert_eq!(links[1].id, first);
}

#[sqlx::test]
async fn test_list_all_empty(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.list_all().await.unwrap().is_empty());
}

#[sqlx::test]
async fn test_delete_by_id(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "del123", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(!repo.delete_by_id(id).await.unwrap());
    assert!(repo.find_by_code("del123").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_by_id_unknown(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(!repo.delete_by_id(9999).await.unwrap());
}

#[sqlx::test]
async fn test_ids_not_reused_after_delete(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "gone12", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));
    repo.delete_by_id(id).await.unwrap();

    let link = repo
        .insert(NewLink::new("https://example.com", "next12"))
        .await
        .unwrap();

    assert!(link.id > id);
}

#[sqlx::test]
async fn test_deleted_code_can_be_reissued(pool: SqlitePool) {
    let id = common::create_test_link(&pool, "reuse1", "https://old.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool));
    repo.delete_by_id(id).await.unwrap();

    let link = repo
        .insert(NewLink::new("https://new.com", "reuse1"))
        .await
        .unwrap();

    assert_eq!(
        repo.find_by_code("reuse1").await.unwrap().unwrap().full_url,
        "https://new.com"
    );
    assert_ne!(link.id, id);
}

#[sqlx::test]
async fn test_initialize_is_idempotent(pool: SqlitePool) {
    common::create_test_link(&pool, "keep12", "https://example.com").await;
    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    repo.initialize().await.unwrap();
    repo.initialize().await.unwrap();

    assert_eq!(common::count_links(&pool).await, 1);
}

#[sqlx::test]
async fn test_ping(pool: SqlitePool) {
    let repo = SqliteLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
