//! Core domain entities.
//!
//! - [`Link`] - A stored short code to URL mapping
//! - [`NewLink`] - Input for creating a link; the store assigns the id

pub mod link;

pub use link::{Link, NewLink};
