//! View-state controller for the post list.
//!
//! Holds the cached list, the form draft and the edit target, and reconciles
//! the list with the responses of a [`PostsApi`]. Every operation swallows its
//! failure into a single error string and leaves the rest of the state as it
//! was before the call.

use std::collections::HashSet;

use crate::domain::{Draft, EditTarget, Post, PostId};
use crate::error::DomainError;
use crate::ports::PostsApi;

pub struct PostListController<A> {
    api: A,
    posts: Vec<Post>,
    draft: Draft,
    editing: Option<EditTarget>,
    loading: bool,
    error: Option<String>,
}

impl<A: PostsApi> PostListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            posts: Vec::new(),
            draft: Draft::default(),
            editing: None,
            loading: false,
            error: None,
        }
    }

    #[cfg(test)]
    fn api(&self) -> &A {
        &self.api
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editing(&self) -> Option<EditTarget> {
        self.editing
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Label of the form's submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Update Post"
        } else {
            "Add Post"
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Replace the list with the server's collection.
    ///
    /// On failure the list is reset to empty.
    pub async fn load(&mut self) {
        self.loading = true;

        match self.api.list().await {
            Ok(posts) => {
                let posts = dedup_by_id(posts);
                tracing::debug!(count = posts.len(), "Loaded posts");
                self.posts = posts;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load posts");
                self.error = Some(e.to_string());
                self.posts.clear();
            }
        }

        self.loading = false;
    }

    /// Form action: update the edit target if there is one, otherwise create.
    pub async fn submit(&mut self) {
        match self.editing {
            Some(target) => self.update(target.id).await,
            None => self.create().await,
        }
    }

    /// Create a post from the draft and append it to the list.
    pub async fn create(&mut self) {
        self.error = None;
        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return;
        }

        match self.api.create(&self.draft.to_input()).await {
            Ok(post) => {
                tracing::debug!(id = %post.id, "Post created");
                match self.posts.iter_mut().find(|p| p.id == post.id) {
                    Some(existing) => *existing = post,
                    None => self.posts.push(post),
                }
                self.draft.clear();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create post");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Send the draft to post `id` and swap in the server's copy.
    pub async fn update(&mut self, id: PostId) {
        self.error = None;
        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return;
        }

        match self.api.update(id, &self.draft.to_input()).await {
            Ok(post) => {
                tracing::debug!(id = %id, "Post updated");
                if let Some(index) = self.posts.iter().position(|p| p.id == id) {
                    let new_id = post.id;
                    self.posts[index] = post;
                    // The server may answer with an id another entry already holds.
                    let mut position = 0;
                    self.posts.retain(|p| {
                        let keep = position == index || p.id != new_id;
                        position += 1;
                        keep
                    });
                }
                self.editing = None;
                self.draft.clear();
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Failed to update post");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Delete post `id` remotely, then drop it from the list.
    pub async fn delete(&mut self, id: PostId) {
        self.error = None;

        match self.api.delete(id).await {
            Ok(()) => {
                tracing::debug!(id = %id, "Post deleted");
                self.posts.retain(|p| p.id != id);
                if self.editing.is_some_and(|target| target.id == id) {
                    self.editing = None;
                }
            }
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Failed to delete post");
                self.error = Some(e.to_string());
            }
        }
    }

    /// Start editing post `id`, copying its fields into the draft.
    pub fn begin_edit(&mut self, id: PostId) {
        match self.posts.iter().find(|p| p.id == id) {
            Some(post) => {
                self.draft = Draft::from_post(post);
                self.editing = Some(EditTarget { id });
            }
            None => {
                self.error = Some(DomainError::NotFound { id }.to_string());
            }
        }
    }

    /// Back to creating a new post with an empty form.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.draft.clear();
    }
}

/// Keep the first occurrence of every id, preserving order.
fn dedup_by_id(posts: Vec<Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    posts.into_iter().filter(|p| seen.insert(p.id)).collect()
}
