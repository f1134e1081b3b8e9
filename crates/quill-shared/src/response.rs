//! Standard bodies returned by the posts service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error body: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    pub fn no_data() -> Self {
        Self::new("No data provided")
    }

    pub fn not_found() -> Self {
        Self::new("Resource not found")
    }

    pub fn method_not_allowed() -> Self {
        Self::new("Method not allowed")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

/// Plain acknowledgement body: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of `GET /` - a short description of the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,
    pub endpoints: BTreeMap<String, String>,
}

impl Default for ApiIndex {
    fn default() -> Self {
        let endpoints = [
            ("GET /posts", "Get all posts"),
            ("GET /posts/<id>", "Get a specific post"),
            ("POST /posts", "Create a new post"),
            ("PUT /posts/<id>", "Update a post"),
            ("DELETE /posts/<id>", "Delete a post"),
        ]
        .into_iter()
        .map(|(route, description)| (route.to_string(), description.to_string()))
        .collect();

        Self {
            message: "Welcome to the Blog API".to_string(),
            endpoints,
        }
    }
}
