//! Client configuration

use std::time::Duration;

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "SNAPSTREAK_API_URL";

/// Default base URL for local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Default per-request timeout, sized for multipart image uploads
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for building an [`crate::ApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Read the base URL from the environment, falling back to the local
    /// development host
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
