//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkAdminService, RedirectService, ShortenService};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::CodeGenerator;

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub redirect_service: Arc<RedirectService>,
    pub admin_service: Arc<LinkAdminService>,
    /// Prefix of returned short URLs, without a trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    /// Wires every service to the same link store.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        generator: Arc<dyn CodeGenerator>,
        max_retries: u32,
        base_url: &str,
    ) -> Self {
        Self {
            shorten_service: Arc::new(ShortenService::new(
                repository.clone(),
                generator,
                max_retries,
            )),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            admin_service: Arc::new(LinkAdminService::new(repository)),
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
