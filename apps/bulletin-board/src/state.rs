//! Application state - shared across all handlers.

use std::sync::Arc;

use kiosk_core::ports::PostStore;
use kiosk_infra::JsonFilePostStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state backed by the configured data directory.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            posts: Arc::new(JsonFilePostStore::new(config.data_dir.clone())),
        }
    }
}
