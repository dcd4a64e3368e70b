#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use linkcut::api::routes::routes;
use linkcut::domain::repositories::LinkRepository;
use linkcut::infrastructure::persistence::{InMemoryLinkRepository, SqliteLinkRepository};
use linkcut::state::AppState;
use linkcut::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
use sqlx::SqlitePool;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://localhost:8000";

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (full_url, short_code) VALUES (?, ?) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Hands out a fixed list of codes, then falls back to random ones.
pub struct SequenceGenerator {
    codes: Mutex<VecDeque<String>>,
    fallback: RandomCodeGenerator,
}

impl SequenceGenerator {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            fallback: RandomCodeGenerator::default(),
        }
    }
}

impl CodeGenerator for SequenceGenerator {
    fn generate(&self) -> String {
        self.codes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.generate())
    }
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_generator(pool, Arc::new(RandomCodeGenerator::default()))
}

pub fn create_test_state_with_generator(
    pool: SqlitePool,
    generator: Arc<dyn CodeGenerator>,
) -> AppState {
    let repository: Arc<dyn LinkRepository> = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    AppState::new(repository, generator, 5, BASE_URL)
}

pub fn create_memory_state(generator: Arc<dyn CodeGenerator>, max_retries: u32) -> AppState {
    AppState::new(
        Arc::new(InMemoryLinkRepository::new()),
        generator,
        max_retries,
        BASE_URL,
    )
}

pub fn create_test_server(state: AppState) -> TestServer {
    let app = routes().with_state(state);
    TestServer::new(app).unwrap()
}

/// Server over the full application router, static files and middleware included.
pub fn create_app_server(state: AppState, allowed_origins: &[String]) -> TestServer {
    let static_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
    let app = linkcut::routes::app_router(state, allowed_origins, &static_dir);
    TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap()
}
