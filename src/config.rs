//! App Configuration
//!
//! Optional JSON embedded in the page as `<script id="app-config">`.
//! Every field falls back to its default when absent.

use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Element id of the embedded JSON config
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Maximum level written to the console
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the config embedded in the current document, defaults when
    /// there is none. Browser only.
    pub fn load() -> Result<Self, ConfigError> {
        let embedded = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match embedded {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json),
            _ => Ok(Self::default()),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(AppConfig::default().level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_level_from_json() {
        let config = AppConfig::from_json(r#"{ "log_level": "debug" }"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_empty_object_keeps_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = AppConfig::from_json("{ log_level: ").unwrap_err();
        assert!(err.to_string().starts_with("invalid app config"));
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "loud".to_string(),
        };
        assert_eq!(config.level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_off_disables_logging() {
        let config = AppConfig::from_json(r#"{ "log_level": "off" }"#).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::OFF);
    }
}
