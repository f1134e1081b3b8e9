//! Data Transfer Objects - request/response bodies of the `/posts` resource.

use serde::{Deserialize, Serialize};

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Both fields default to empty so a body missing one of them still decodes
/// and can be rejected with a field-specific message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl PostInput {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Single-post response: `{"post": ..., "message": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope<T> {
    pub post: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> PostEnvelope<T> {
    pub fn new(post: T) -> Self {
        Self {
            post,
            message: None,
        }
    }

    pub fn with_message(post: T, message: impl Into<String>) -> Self {
        Self {
            post,
            message: Some(message.into()),
        }
    }
}

/// Response of `GET /posts`.
///
/// Accepts either a bare array or an object wrapping the array under `posts`.
/// An object whose `posts` is missing or `null` decodes as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged, bound(deserialize = "T: Deserialize<'de>"))]
pub enum PostListResponse<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default)]
        posts: Option<Vec<T>>,
    },
}

impl<T> PostListResponse<T> {
    pub fn wrapped(posts: Vec<T>) -> Self {
        Self::Wrapped { posts: Some(posts) }
    }

    pub fn into_posts(self) -> Vec<T> {
        match self {
            Self::Bare(posts) => posts,
            Self::Wrapped { posts } => posts.unwrap_or_default(),
        }
    }
}
