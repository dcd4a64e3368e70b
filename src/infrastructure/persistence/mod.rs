//! Link store implementations.
//!
//! # Repositories
//!
//! - [`SqliteLinkRepository`] - SQLite storage through SQLx
//! - [`InMemoryLinkRepository`] - process-local store for tests and embedding
//!
//! [`connect_pool`] builds the SQLite pool used by the server and the admin CLI.

pub mod memory_link_repository;
pub mod pool;
pub mod sqlite_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pool::connect_pool;
pub use sqlite_link_repository::SqliteLinkRepository;
