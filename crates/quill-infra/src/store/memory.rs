//! In-memory post store - the posts service keeps no other state.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostId};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

struct Store {
    posts: Vec<Post>,
    next_id: i64,
}

/// Insertion-ordered post list behind an async RwLock.
///
/// Ids come from a counter and are never reused after a delete.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.posts.clone())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, title: String, content: String) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let post = Post::new(PostId(store.next_id), title, content);
        store.next_id += 1;
        store.posts.push(post.clone());

        tracing::debug!(id = %post.id, "Post stored");
        Ok(post)
    }

    async fn update(
        &self,
        id: PostId,
        title: String,
        content: String,
    ) -> Result<Option<Post>, RepoError> {
        let mut store = self.store.write().await;

        let Some(post) = store.posts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        post.title = title;
        post.content = content;
        post.updated_at = Some(Utc::now());

        Ok(Some(post.clone()))
    }

    async fn delete(&self, id: PostId) -> Result<bool, RepoError> {
        let mut store = self.store.write().await;

        let before = store.posts.len();
        store.posts.retain(|p| p.id != id);
        Ok(store.posts.len() != before)
    }
}
