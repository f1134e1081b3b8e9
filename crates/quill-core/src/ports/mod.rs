//! Ports - trait definitions for external dependencies.
//! Infrastructure crates provide the implementations.

mod posts_api;
mod repository;

pub use posts_api::PostsApi;
pub use repository::PostRepository;
