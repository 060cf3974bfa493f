//! Filesystem-backed music catalog.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use kiosk_core::ports::MusicLibrary;

/// Extensions considered playable. Matched exactly, like a shell glob.
pub const AUDIO_EXTENSIONS: [&str; 4] = ["mp3", "wav", "ogg", "m4a"];

/// Enumerates audio files directly inside a fixed directory.
///
/// The listing is rebuilt on every call; nothing is cached and
/// subdirectories are not descended into.
pub struct FsMusicLibrary {
    dir: PathBuf,
}

impl FsMusicLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the catalog is rooted at.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl MusicLibrary for FsMusicLibrary {
    async fn playlist(&self) -> Vec<String> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut names = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let playable = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| AUDIO_EXTENSIONS.contains(&ext));
            if !playable {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
                names.push(name.to_string());
            }
        }
        names.sort();
        names
    }

    // TODO: the tail is joined as-is; reject `..` segments before exposing
    // this endpoint outside the portal proxy.
    fn resolve(&self, tail: &str) -> PathBuf {
        self.dir.join(tail)
    }
}
