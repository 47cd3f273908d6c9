use std::time::Duration;

use fakestore::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use url::Url;

use super::EnvLookup;
use super::error::ConfigError;

/// Configuration for the remote product catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Load API configuration
    ///
    /// Environment variables:
    /// - CATALOG_API_URL: Base URL of the catalog (default: "https://fakestoreapi.com")
    /// - CATALOG_API_TIMEOUT_SECS: Request timeout in seconds (default: 30)
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let base_url = lookup("CATALOG_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|_| ConfigError::InvalidApiUrl(base_url.clone()))?;

        let timeout = match lookup("CATALOG_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }
}
