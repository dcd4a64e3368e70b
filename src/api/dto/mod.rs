//! Request and response bodies of the HTTP API.

pub mod health;
pub mod links;
pub mod shorten;
