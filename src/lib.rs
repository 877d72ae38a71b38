// Library exports for testing and the server binaries

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod services;
pub mod utils;

use std::sync::Arc;

use models::lightbulb::Lightbulb;
use services::in_memory_storage::InMemoryStorage;
use services::storage::Storage;
use utils::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// State backed by an `InMemoryStorage` holding the configured seed lightbulbs
    pub fn in_memory(config: &AppConfig) -> Self {
        let seeds = config
            .seed_lightbulbs
            .iter()
            .map(|name| Lightbulb::new(name.clone(), false));
        Self::new(Arc::new(InMemoryStorage::with_lightbulbs(seeds)))
    }
}
