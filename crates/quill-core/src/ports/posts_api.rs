use async_trait::async_trait;
use quill_shared::PostInput;

use crate::domain::{Post, PostId};
use crate::error::ApiError;

/// Client-side access to the remote `/posts` collection.
#[async_trait]
pub trait PostsApi: Send + Sync {
    /// Fetch the whole collection in server order.
    async fn list(&self) -> Result<Vec<Post>, ApiError>;

    /// Create a post and return it as stored by the server.
    async fn create(&self, input: &PostInput) -> Result<Post, ApiError>;

    /// Replace the title and content of a post.
    async fn update(&self, id: PostId, input: &PostInput) -> Result<Post, ApiError>;

    /// Remove a post. The response body is ignored.
    async fn delete(&self, id: PostId) -> Result<(), ApiError>;
}
