use std::sync::Arc;

use crate::application::services::{LinkService, ResolutionService};
use crate::domain::repositories::LinkRepository;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub resolution_service: Arc<ResolutionService>,
    pub repository: Arc<dyn LinkRepository>,
    /// Base under which short URLs are presented, e.g. `https://s.example.com`.
    pub base_url: String,
}

impl AppState {
    pub fn new(repository: Arc<dyn LinkRepository>, base_url: String) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            resolution_service: Arc::new(ResolutionService::new(repository.clone())),
            repository,
            base_url,
        }
    }
}
