//! Utility functions for code generation, URL validation, and database errors.
//!
//! - [`code_generator`] - Random short code generation
//! - [`url_validator`] - `http(s)` URL validation for untrusted input
//! - [`db_error`] - Classification of SQLx errors

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
