//! Server configuration loaded from environment variables.

use std::env;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from `HOST` and `PORT`.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(env::var("PORT").ok().as_deref()),
        }
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|p| p.parse().ok()).unwrap_or(5001)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_5001() {
        assert_eq!(parse_port(None), 5001);
        assert_eq!(parse_port(Some("not-a-port")), 5001);
        assert_eq!(parse_port(Some("8080")), 8080);
    }
}
