use quill_shared::PostInput;

use super::{Post, PostId};
use crate::error::DomainError;

/// Unsaved form input for a new post or an in-progress edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Prefill the form from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self::new(post.title.clone(), post.content.clone())
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    /// Both fields are required; whitespace-only counts as missing.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(DomainError::Validation("Content is required".to_string()));
        }
        Ok(())
    }

    /// Request body for this draft.
    pub fn to_input(&self) -> PostInput {
        PostInput::new(self.title.clone(), self.content.clone())
    }
}

/// Which post the form is editing. `None` in the controller means "creating".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditTarget {
    pub id: PostId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_fields() {
        assert!(Draft::new("T", "C").validate().is_ok());

        let err = Draft::new("  ", "C").validate().unwrap_err();
        assert_eq!(err.to_string(), "Title is required");

        let err = Draft::new("T", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Content is required");
    }

    #[test]
    fn test_clear_empties_fields() {
        let mut draft = Draft::new("T", "C");
        draft.clear();
        assert_eq!(draft, Draft::default());
    }
}
