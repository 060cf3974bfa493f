//! Domain-level error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the post store.
///
/// Only the save path and the strict load path return these; the lenient
/// load path logs and swallows them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{op} failed for {}: {source}", path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed post data: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}
