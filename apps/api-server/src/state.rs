//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::InMemoryPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        tracing::info!("Using in-memory post store");
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
        }
    }
}
