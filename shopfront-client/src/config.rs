//! Client configuration

/// Environment variable naming the API origin.
pub const ENV_API_BASE: &str = "SHOPFRONT_API_BASE";
/// Environment variable naming the per-store API path segment.
pub const ENV_API_PATH: &str = "SHOPFRONT_API_PATH";

/// Client configuration for connecting to the catalog API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "https://api.example.com/v2")
    pub base_url: String,

    /// Per-store path segment of catalog routes
    /// (e.g., "demo-store" in "/api/demo-store/admin/products")
    pub api_path: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>, api_path: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_path: api_path.into(),
            timeout: 30,
        }
    }

    /// Read configuration from `SHOPFRONT_API_BASE` / `SHOPFRONT_API_PATH`
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var(ENV_API_BASE).ok()?;
        let api_path = std::env::var(ENV_API_PATH).ok()?;
        Some(Self::new(base_url, api_path))
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080", "store")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ClientConfig::new("https://api.example.com/v2/", "demo");
        assert_eq!(config.base_url, "https://api.example.com/v2");
        assert_eq!(config.api_path, "demo");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_config_with_timeout() {
        let config = ClientConfig::default().with_timeout(5);
        assert_eq!(config.timeout, 5);
    }
}
