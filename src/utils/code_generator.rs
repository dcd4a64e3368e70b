//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-symbol alphanumeric alphabet
//! (`A-Z`, `a-z`, `0-9`). With the default length of 6 there are
//! 62^6 ≈ 56.8 billion combinations, which keeps collisions rare but not
//! impossible; uniqueness is enforced by the link store.

use rand::{Rng, distr::Alphanumeric};

/// Default length of generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Path segments served by the router itself.
///
/// A generated code equal to one of these would be shadowed by a fixed
/// route, so the shortening service treats it as a collision.
const RESERVED_CODES: &[&str] = &["links", "health", "shorten", "static"];

/// Source of candidate short codes.
///
/// Implementations must be pure: no storage access and no persisted state.
/// The shortening service pairs a generator with the link store and retries
/// on collision.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Generates random alphanumeric codes of a fixed length.
///
/// Uses the thread-local RNG. Not cryptographically secure, which is
/// acceptable for short codes that carry no secret.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Returns true if `code` would be shadowed by a fixed route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
