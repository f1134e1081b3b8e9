//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! the reqwest-backed [`HttpPostsApi`] used by the client and the
//! [`InMemoryPostRepository`] used by the posts service.

pub mod http;
pub mod store;

pub use http::{HttpPostsApi, backend_url_for_host};
pub use store::InMemoryPostRepository;
