//! # linkcut
//!
//! A small single-node URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - The link entity and the link store contract
//! - **Application Layer** ([`application`]) - Shortening, redirect and administration services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory link stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Short codes
//!
//! Codes are 6 random alphanumeric characters by default. Uniqueness is
//! enforced by the store; the shortening service retries a bounded number of
//! times on collision.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://links.db"
//! export BASE_URL="http://localhost:8000"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        DeleteOutcome, LinkAdminService, RedirectService, ShortenService,
    };
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryLinkRepository, SqliteLinkRepository};
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};
}
