use async_trait::async_trait;

use crate::domain::{Post, PostId};
use crate::error::RepoError;

/// Server-side post storage.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts in insertion order.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError>;

    /// Store a new post under a freshly assigned id.
    async fn insert(&self, title: String, content: String) -> Result<Post, RepoError>;

    /// Overwrite title and content and bump `updated_at`.
    /// Returns `None` when no post has that id.
    async fn update(
        &self,
        id: PostId,
        title: String,
        content: String,
    ) -> Result<Option<Post>, RepoError>;

    /// Returns `false` when no post has that id.
    async fn delete(&self, id: PostId) -> Result<bool, RepoError>;
}
