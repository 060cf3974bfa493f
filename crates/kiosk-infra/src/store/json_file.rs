//! JSON-file-backed post store with atomic replace semantics.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;

use kiosk_core::domain::Post;
use kiosk_core::error::StoreError;
use kiosk_core::ports::PostStore;

/// Name of the collection file inside the data directory.
const POSTS_FILE: &str = "posts.json";

/// Owner-only modes: post content is user-entered text, unreadable to other
/// local accounts.
const DIR_MODE: u32 = 0o700;
const FILE_MODE: u32 = 0o600;

/// Stores the whole post collection as one pretty-printed JSON array.
///
/// Saves write a temp file in the same directory and rename it over the
/// target, so the target path never shows partial content. Concurrent
/// load-modify-save sequences are not coordinated; the last rename wins.
pub struct JsonFilePostStore {
    dir: PathBuf,
    file: PathBuf,
}

impl JsonFilePostStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let file = dir.join(POSTS_FILE);
        Self { dir, file }
    }

    /// Path of the collection file.
    pub fn path(&self) -> &Path {
        &self.file
    }

    /// Create the data directory (owner-only) if it is missing. Idempotent.
    async fn ensure_dir(&self) -> Result<(), StoreError> {
        if tokio::fs::try_exists(&self.dir).await.unwrap_or(false) {
            return Ok(());
        }
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io("create dir", &self.dir, e))?;
        set_mode(&self.dir, DIR_MODE)
    }

    async fn read_collection(&self) -> Result<Vec<Post>, StoreError> {
        self.ensure_dir().await?;
        let bytes = match tokio::fs::read(&self.file).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io("read", &self.file, e)),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write-to-temp-then-rename. Each save gets its own temp file, so
    /// racing saves cannot rename each other's partial writes; the temp is
    /// removed on drop if the rename never happens.
    fn write_atomic(&self, json: &[u8]) -> Result<(), StoreError> {
        let mut tmp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| StoreError::io("create temp file", &self.dir, e))?;
        tmp.write_all(json)
            .map_err(|e| StoreError::io("write", tmp.path().to_path_buf(), e))?;
        set_mode(tmp.path(), FILE_MODE)?;
        tmp.persist(&self.file)
            .map_err(|e| StoreError::io("rename", &self.file, e.error))?;
        set_mode(&self.file, FILE_MODE)
    }
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        self.read_collection().await
    }

    async fn load_or_default(&self) -> Vec<Post> {
        match self.read_collection().await {
            Ok(posts) => posts,
            Err(err) => {
                tracing::error!(
                    error = %err,
                    path = %self.file.display(),
                    "failed to load posts, continuing with empty collection"
                );
                Vec::new()
            }
        }
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        self.ensure_dir().await?;
        let json = serde_json::to_vec_pretty(posts).map_err(StoreError::from)?;
        if let Err(err) = self.write_atomic(&json) {
            tracing::error!(error = %err, path = %self.file.display(), "failed to save posts");
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<(), StoreError> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, Permissions::from_mode(mode))
        .map_err(|e| StoreError::io("chmod", path, e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<(), StoreError> {
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────
