use crate::ui::app::ViewMode;

use super::EnvLookup;
use super::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub view: ViewMode,
}

impl UiConfig {
    /// Environment variables:
    /// - CATALOG_VIEW: "table" or "cards" (default: "table")
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self, ConfigError> {
        let view = match lookup("CATALOG_VIEW") {
            Some(raw) => raw
                .parse::<ViewMode>()
                .map_err(|_| ConfigError::InvalidView(raw))?,
            None => ViewMode::Table,
        };
        Ok(Self { view })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_table_view() {
        let config = UiConfig::from_lookup(&|_| None).unwrap();
        assert_eq!(config.view, ViewMode::Table);
    }

    #[test]
    fn should_parse_cards_view() {
        let config = UiConfig::from_lookup(&|_| Some("cards".to_string())).unwrap();
        assert_eq!(config.view, ViewMode::Cards);
    }

    #[test]
    fn should_reject_unknown_view() {
        let result = UiConfig::from_lookup(&|_| Some("grid".to_string()));
        assert!(matches!(result, Err(ConfigError::InvalidView(_))));
    }
}
