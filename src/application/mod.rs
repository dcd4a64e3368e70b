//! Application layer services implementing business logic.
//!
//! Services consume the [`crate::domain::repositories::LinkRepository`] trait
//! and provide a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Code allocation with bounded collision retry
//! - [`services::redirect_service::RedirectService`] - Short code resolution
//! - [`services::admin_service::LinkAdminService`] - Listing and deleting links

pub mod services;
