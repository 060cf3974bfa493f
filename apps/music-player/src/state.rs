//! Application state - shared across all handlers.

use std::sync::Arc;

use kiosk_core::ports::MusicLibrary;
use kiosk_infra::FsMusicLibrary;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub library: Arc<dyn MusicLibrary>,
}

impl AppState {
    /// Build the application state over the configured music directory.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            library: Arc::new(FsMusicLibrary::new(config.music_dir.clone())),
        }
    }
}
