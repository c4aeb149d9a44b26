//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenService;
use crate::infrastructure::memory::InMemoryLinkRepository;

/// Service type used by the running server.
pub type AppShortenService = ShortenService<InMemoryLinkRepository>;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<AppShortenService>,
}

impl AppState {
    pub fn new(shorten_service: Arc<AppShortenService>) -> Self {
        Self { shorten_service }
    }
}
