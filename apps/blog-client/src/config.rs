//! Client configuration loaded from environment variables.

use std::env;

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Hostname the client considers itself served from; selects the backend.
    pub hostname: String,
    pub json_logs: bool,
}

impl ClientConfig {
    /// Load configuration from `CLIENT_HOST` and `LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self {
            hostname: env::var("CLIENT_HOST").unwrap_or_else(|_| "localhost".to_string()),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }
}
