use super::api_config::ApiConfig;
use super::error::ConfigError;
use super::logging_config::LoggingConfig;
use super::ui_config::UiConfig;
use super::{EnvLookup, process_env};

pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub ui: UiConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiConfig::from_lookup(lookup)?,
            logging: LoggingConfig::from_lookup(lookup),
            ui: UiConfig::from_lookup(lookup)?,
        })
    }
}
