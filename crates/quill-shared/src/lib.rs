//! # Quill Shared
//!
//! Wire types shared between the blog client and the posts service.
//! Post payloads are generic so this crate stays free of domain types.

pub mod dto;
pub mod response;

pub use dto::{PostEnvelope, PostInput, PostListResponse};
pub use response::{ApiIndex, ErrorBody, MessageBody};
