//! Domain-level error types.

use std::fmt;

use thiserror::Error;

use crate::domain::PostId;

/// Domain errors - business rule failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post with id {id} not found")]
    NotFound { id: PostId },

    #[error("{0}")]
    Validation(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// The remote call an [`ApiError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Fetch => write!(f, "fetch posts"),
            Operation::Create => write!(f, "create post"),
            Operation::Update => write!(f, "update post"),
            Operation::Delete => write!(f, "delete post"),
        }
    }
}

/// Errors raised by a [`PostsApi`](crate::ports::PostsApi) implementation.
///
/// The controller does not classify these; it only surfaces the message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Failed to {operation}")]
    Rejected { operation: Operation, status: u16 },

    #[error("Invalid response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_is_generic() {
        let err = ApiError::Rejected {
            operation: Operation::Create,
            status: 500,
        };
        assert_eq!(err.to_string(), "Failed to create post");

        let err = ApiError::Rejected {
            operation: Operation::Fetch,
            status: 404,
        };
        assert_eq!(err.to_string(), "Failed to fetch posts");
    }
}
