pub mod api_config;
pub mod app_config;
pub mod error;
pub mod logging_config;
pub mod ui_config;

/// Reads a configuration value by environment variable name.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Lookup backed by the process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
