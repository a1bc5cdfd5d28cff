//! Backend API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default backend base URL, matching the local development server.
const DEFAULT_API_BASE: &str = "http://localhost:8888/api/v1";

/// Environment variable that overrides the backend base URL.
pub const API_BASE_ENV: &str = "STOREFRONT_API_BASE";

/// Backend API configuration.
///
/// The base URL is the only environment contract the pages have.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Create a config with an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Read the base URL from the environment, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_API_BASE),
        }
    }

    /// URL for the paginated product catalog.
    pub fn products_url(&self, page: u32, size: u32) -> String {
        format!("{}/products?page={}&size={}", self.base_url, page, size)
    }

    /// URL for a single product by identifier.
    pub fn product_url(&self, id: u64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    /// URL for a paginated facet list (`categories`, `colors`, `sizes`, `styles`).
    pub fn facet_url(&self, facet: &str, page: u32, size: u32) -> String {
        format!("{}/{}?page={}&size={}", self.base_url, facet, page, size)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8888/api/v1");
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("https://shop.example.com/api/v1/");
        assert_eq!(
            config.product_url(42),
            "https://shop.example.com/api/v1/products/42"
        );
    }

    #[test]
    fn test_catalog_and_facet_urls() {
        let config = ApiConfig::default();
        assert_eq!(
            config.products_url(0, 100),
            "http://localhost:8888/api/v1/products?page=0&size=100"
        );
        assert_eq!(
            config.facet_url("colors", 0, 10),
            "http://localhost:8888/api/v1/colors?page=0&size=10"
        );
    }
}
