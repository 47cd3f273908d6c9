/// Startup configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.invalid_api_url: {0}")]
    InvalidApiUrl(String),
    #[error("config.invalid_timeout: {0}")]
    InvalidTimeout(String),
    #[error("config.invalid_view: {0}")]
    InvalidView(String),
    #[error("config.log_file: {0}")]
    LogFile(#[from] std::io::Error),
}
