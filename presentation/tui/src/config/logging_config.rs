use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use super::EnvLookup;
use super::error::ConfigError;

/// Where log output goes. The terminal belongs to the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub file: PathBuf,
}

impl LoggingConfig {
    /// Environment variables:
    /// - CATALOG_LOG_FILE: Path of the log file (default: "catalog.log")
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let file = lookup("CATALOG_LOG_FILE").unwrap_or_else(|| "catalog.log".to_string());
        Self {
            file: PathBuf::from(file),
        }
    }
}

/// Initialize tracing with RUST_LOG env filter, appending to the log file.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.file)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
