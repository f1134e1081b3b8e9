//! # Quill Core
//!
//! The domain layer of Quill: posts, drafts, the ports to the outside world
//! and the view-state controller that keeps a local post list in sync with
//! the remote collection.

pub mod controller;
pub mod domain;
pub mod error;
pub mod ports;

pub use controller::PostListController;
pub use error::{ApiError, DomainError};
