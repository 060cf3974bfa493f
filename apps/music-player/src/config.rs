//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Music directory used when `MUSIC_DIR` is not set.
const DEFAULT_MUSIC_DIR: &str = "/var/www/kiosk/public/music";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub music_dir: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8081),
            music_dir: env::var("MUSIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MUSIC_DIR)),
        }
    }
}
