use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Persistence port for the post collection.
///
/// Implementations own the backing file and must replace it atomically on
/// save, so a reader never observes a half-written collection. Nothing
/// coordinates concurrent load-modify-save sequences; the last writer wins.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Strict read: an unreadable or unparseable collection is an error.
    /// A collection that does not exist yet is empty, not an error.
    async fn load(&self) -> Result<Vec<Post>, StoreError>;

    /// Lenient read used on mutation paths: failures are logged and treated
    /// as an empty collection.
    async fn load_or_default(&self) -> Vec<Post>;

    /// Persist the full collection, replacing whatever is on disk.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
