//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and then passed
//! explicitly to the server; no component reads the environment itself.
//!
//! ## Database
//!
//! ```bash
//! export DATABASE_URL="sqlite://links.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is built from `DB_URL`, a plain SQLite
//! file path (default `links.db`).
//!
//! ## Optional Variables
//!
//! - `BASE_URL` - Prefix for returned short URLs (default: `http://localhost:8000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `CORS_ORIGINS` - Comma-separated allowed origins (default: none)
//! - `CORE_1`, `CORE_2` - Additional single allowed origins
//! - `STATIC_DIR` - Directory with `main.html` and static assets (default: `static`)
//! - `CODE_LENGTH` - Length of generated codes (default: 6)
//! - `MAX_RETRIES` - Collision retries per shorten request (default: 5)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;

use crate::application::services::shorten_service::DEFAULT_MAX_RETRIES;
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub base_url: String,
    pub listen_addr: String,
    /// Origins allowed to call the API from a browser.
    pub allowed_origins: Vec<String>,
    pub static_dir: String,
    pub code_length: usize,
    /// Retries after the first collision; a shorten request makes at most
    /// `max_retries + 1` insert attempts.
    pub max_retries: u32,
    pub log_level: String,
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults; range checks
    /// happen in [`Config::validate`].
    pub fn from_env() -> Self {
        let database_url = Self::load_database_url();

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let allowed_origins = Self::load_allowed_origins();
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_CODE_LENGTH);

        let max_retries = env::var("MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_RETRIES);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            database_url,
            base_url,
            listen_addr,
            allowed_origins,
            static_dir,
            code_length,
            max_retries,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        }
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `DB_URL` file path (default `links.db`) as `sqlite://<path>`
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DB_URL").unwrap_or_else(|_| "links.db".to_string());
        if path.starts_with("sqlite:") {
            path
        } else {
            format!("sqlite://{}", path)
        }
    }

    /// Collects allowed CORS origins from `CORS_ORIGINS`, `CORE_1` and `CORE_2`.
    ///
    /// Blank entries are skipped and duplicates removed, keeping first-seen order.
    fn load_allowed_origins() -> Vec<String> {
        let listed = env::var("CORS_ORIGINS").unwrap_or_default();
        let singles = ["CORE_1", "CORE_2"].into_iter().filter_map(|k| env::var(k).ok());

        let mut origins: Vec<String> = Vec::new();
        for origin in listed
            .split(',')
            .map(str::to_string)
            .chain(singles)
            .map(|o| o.trim().trim_end_matches('/').to_string())
        {
            if !origin.is_empty() && !origins.contains(&origin) {
                origins.push(origin);
            }
        }

        origins
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL
    /// - `base_url` or an allowed origin is not `http(s)`
    /// - `listen_addr` is invalid
    /// - `code_length` is outside 4..=32 or `max_retries` above 100
    /// - `log_format` is not `text` or `json`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !is_http_url(&self.base_url) {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if let Some(origin) = self.allowed_origins.iter().find(|o| !is_http_url(o)) {
            anyhow::bail!(
                "CORS origin must start with 'http://' or 'https://', got '{}'",
                origin
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if self.max_retries > 100 {
            anyhow::bail!(
                "MAX_RETRIES is too large (max: 100), got {}",
                self.max_retries
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);

        if self.allowed_origins.is_empty() {
            tracing::info!("  CORS: no origins allowed");
        } else {
            tracing::info!("  CORS origins: {}", self.allowed_origins.join(", "));
        }

        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Code length: {}", self.code_length);
        tracing::info!("  Max retries: {}", self.max_retries);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
