use serde::{Deserialize, Serialize};
use std::env;

/// Default address of the local metadata API server.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Connection settings for the IMDb metadata API.
///
/// The base URL comes from the `IMDB_API_URL` environment variable and falls
/// back to the local development address. Nothing here is persisted; the
/// config is built once at startup and cloned into tool executions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Trailing slashes would produce `//endpoint` paths.
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the API location from the environment.
    pub fn from_env() -> Self {
        let base_url = env::var("IMDB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.endpoint_url("/health"), "http://localhost:8000/health");
    }

    #[test]
    fn default_points_at_local_server() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_URL);
    }
}
