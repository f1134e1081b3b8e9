//! reqwest implementation of [`PostsApi`].

use async_trait::async_trait;
use reqwest::{Client, Response};

use quill_core::domain::{Post, PostId};
use quill_core::error::{ApiError, Operation};
use quill_core::ports::PostsApi;
use quill_shared::{PostEnvelope, PostInput, PostListResponse};

use super::backend_url_for_host;

/// JSON-over-HTTP client for the `/posts` collection.
///
/// No timeouts and no retries: each call is a single request.
pub struct HttpPostsApi {
    base_url: String,
    client: Client,
}

impl HttpPostsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client for the backend matching `hostname`.
    pub fn for_host(hostname: &str) -> Self {
        Self::new(backend_url_for_host(hostname))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }

    fn item_url(&self, id: PostId) -> String {
        format!("{}/posts/{}", self.base_url, id)
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

fn decode(e: reqwest::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

fn check_status(response: Response, operation: Operation) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::debug!(%operation, status = status.as_u16(), "Backend rejected request");
        Err(ApiError::Rejected {
            operation,
            status: status.as_u16(),
        })
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list(&self) -> Result<Vec<Post>, ApiError> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;
        let body: PostListResponse<Post> = check_status(response, Operation::Fetch)?
            .json()
            .await
            .map_err(decode)?;

        let posts = body.into_posts();
        tracing::debug!(count = posts.len(), "Fetched posts");
        Ok(posts)
    }

    async fn create(&self, input: &PostInput) -> Result<Post, ApiError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(input)
            .send()
            .await
            .map_err(transport)?;
        let body: PostEnvelope<Post> = check_status(response, Operation::Create)?
            .json()
            .await
            .map_err(decode)?;

        Ok(body.post)
    }

    async fn update(&self, id: PostId, input: &PostInput) -> Result<Post, ApiError> {
        let response = self
            .client
            .put(self.item_url(id))
            .json(input)
            .send()
            .await
            .map_err(transport)?;
        let body: PostEnvelope<Post> = check_status(response, Operation::Update)?
            .json()
            .await
            .map_err(decode)?;

        Ok(body.post)
    }

    async fn delete(&self, id: PostId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(transport)?;
        check_status(response, Operation::Delete)?;

        Ok(())
    }
}
