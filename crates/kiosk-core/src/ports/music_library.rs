use std::path::PathBuf;

use async_trait::async_trait;

/// Read-only port over the audio file directory.
#[async_trait]
pub trait MusicLibrary: Send + Sync {
    /// Playable file names (basenames), sorted lexicographically. A missing
    /// or unreadable directory yields an empty list.
    async fn playlist(&self) -> Vec<String>;

    /// Map a request path tail onto the backing directory.
    fn resolve(&self, tail: &str) -> PathBuf;
}
