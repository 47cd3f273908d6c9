use std::time::Duration;

use reqwest::Client;

/// Public catalog used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client configuration for the product catalog API.
pub struct FakeStoreClient {
    pub client: Client,
    pub base_url: String,
}

impl FakeStoreClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the product list endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }
}

impl Default for FakeStoreClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_products_url_from_base_url() {
        let client = FakeStoreClient::new("http://localhost:3000", DEFAULT_TIMEOUT);
        assert_eq!(client.products_url(), "http://localhost:3000/products");
    }

    #[test]
    fn should_strip_trailing_slash_from_base_url() {
        let client = FakeStoreClient::new("http://localhost:3000/", DEFAULT_TIMEOUT);
        assert_eq!(client.products_url(), "http://localhost:3000/products");
    }

    #[test]
    fn should_default_to_public_catalog() {
        let client = FakeStoreClient::default();
        assert_eq!(client.products_url(), "https://fakestoreapi.com/products");
    }
}
