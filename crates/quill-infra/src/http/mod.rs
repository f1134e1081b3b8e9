//! HTTP access to the remote posts collection.

mod client;

pub use client::HttpPostsApi;

/// Backend used when the client runs on `localhost`.
pub const LOCAL_BACKEND_URL: &str = "http://localhost:5001";

/// Backend used everywhere else (the service name inside the compose network).
pub const SERVICE_BACKEND_URL: &str = "http://backend:5001";

/// Pick the backend base URL from the hostname the client runs under.
pub fn backend_url_for_host(hostname: &str) -> &'static str {
    if hostname == "localhost" {
        LOCAL_BACKEND_URL
    } else {
        SERVICE_BACKEND_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localhost_uses_local_backend() {
        assert_eq!(backend_url_for_host("localhost"), "http://localhost:5001");
    }

    #[test]
    fn test_other_hosts_use_service_name() {
        assert_eq!(backend_url_for_host("frontend"), "http://backend:5001");
        assert_eq!(backend_url_for_host("127.0.0.1"), "http://backend:5001");
    }
}
