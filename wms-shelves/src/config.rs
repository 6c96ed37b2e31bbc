//! Page-level configuration.
//!
//! Defaults match the stock movement form. A page can override them with
//! `data-*` attributes on the warehouse control, or a script can pass a
//! JSON object when mounting its own binding.

use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

use crate::{endpoint::DEFAULT_SHELVES_PATH, error::ConfigError, select::FailureDisplay};

pub const DEFAULT_WAREHOUSE_ELEMENT_ID: &str = "warehouse_id";
pub const DEFAULT_SHELF_ELEMENT_ID: &str = "shelf_id";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `data-*` attribute names read off the warehouse control.
pub const ATTR_SHELVES_URL: &str = "data-shelves-url";
pub const ATTR_SHELF_TARGET: &str = "data-shelf-target";
pub const ATTR_FAILURE_DISPLAY: &str = "data-shelves-failure";
pub const ATTR_LOG_LEVEL: &str = "data-log-level";

#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
#[serde(default)]
pub struct ShelfRefreshConfig {
    pub warehouse_element_id: String,
    pub shelf_element_id: String,
    pub shelves_url: String,
    #[serde(deserialize_with = "failure_display_from_str")]
    pub failure_display: FailureDisplay,
    pub log_level: String,
}

impl Default for ShelfRefreshConfig {
    fn default() -> Self {
        Self {
            warehouse_element_id: DEFAULT_WAREHOUSE_ELEMENT_ID.to_string(),
            shelf_element_id: DEFAULT_SHELF_ELEMENT_ID.to_string(),
            shelves_url: DEFAULT_SHELVES_PATH.to_string(),
            failure_display: FailureDisplay::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn failure_display_from_str<'de, D>(deserializer: D) -> Result<FailureDisplay, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    FailureDisplay::from_str(&raw).map_err(serde::de::Error::custom)
}

impl ShelfRefreshConfig {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay `data-*` attributes onto the defaults. `lookup` returns the
    /// attribute value, or `None` when the attribute is absent. Blank values
    /// are treated as absent. Fails on the first invalid attribute.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (config, errors) = Self::from_attributes_lossy(lookup);
        if let Some(err) = errors.into_iter().next() {
            return Err(err);
        }
        config.validate()?;
        Ok(config)
    }

    /// Like `from_attributes`, but an invalid attribute only skips that
    /// attribute; the rest still apply. Returns every rejected value.
    pub fn from_attributes_lossy<F>(lookup: F) -> (Self, Vec<ConfigError>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        let mut errors = Vec::new();
        if let Some(url) = get(ATTR_SHELVES_URL) {
            config.shelves_url = url;
        }
        if let Some(target) = get(ATTR_SHELF_TARGET) {
            config.shelf_element_id = target;
        }
        if let Some(display) = get(ATTR_FAILURE_DISPLAY) {
            match display.parse() {
                Ok(display) => config.failure_display = display,
                Err(err) => errors.push(err),
            }
        }
        if let Some(level) = get(ATTR_LOG_LEVEL) {
            match LevelFilter::from_str(level.trim()) {
                Ok(_) => config.log_level = level,
                Err(_) => errors.push(ConfigError::LogLevel(level)),
            }
        }
        (config, errors)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.warehouse_element_id.is_empty() {
            return Err(ConfigError::Empty("warehouse_element_id"));
        }
        if self.shelf_element_id.is_empty() {
            return Err(ConfigError::Empty("shelf_element_id"));
        }
        if self.shelves_url.is_empty() {
            return Err(ConfigError::Empty("shelves_url"));
        }
        self.level_filter().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ShelfRefreshConfig::default();
        assert_eq!(config.warehouse_element_id, "warehouse_id");
        assert_eq!(config.shelf_element_id, "shelf_id");
        assert_eq!(config.shelves_url, "/stock/api/shelves");
        assert_eq!(config.failure_display, FailureDisplay::SentinelOnly);
        assert_eq!(config.level_filter(), Ok(LevelFilter::Info));
    }

    #[test]
    fn test_from_attributes_overlay() {
        let attrs: HashMap<&str, &str> = HashMap::from([
            (ATTR_SHELVES_URL, "/wms/stock/api/shelves"),
            (ATTR_SHELF_TARGET, "movement_shelf"),
            (ATTR_FAILURE_DISPLAY, "placeholder"),
            (ATTR_LOG_LEVEL, ""),
        ]);
        let config =
            ShelfRefreshConfig::from_attributes(|name| attrs.get(name).map(|v| v.to_string()))
                .unwrap();
        assert_eq!(config.shelves_url, "/wms/stock/api/shelves");
        assert_eq!(config.shelf_element_id, "movement_shelf");
        assert_eq!(config.failure_display, FailureDisplay::Placeholder);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_from_attributes_rejects_bad_values() {
        let err = ShelfRefreshConfig::from_attributes(|name| {
            (name == ATTR_LOG_LEVEL).then(|| "loud".to_string())
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::LogLevel("loud".to_string()));

        let err = ShelfRefreshConfig::from_attributes(|name| {
            (name == ATTR_FAILURE_DISPLAY).then(|| "toast".to_string())
        })
        .unwrap_err();
        assert_eq!(err, ConfigError::FailureDisplay("toast".to_string()));
    }

    #[test]
    fn test_lossy_attributes_keep_valid_values() {
        let attrs: HashMap<&str, &str> = HashMap::from([
            (ATTR_SHELF_TARGET, "movement_shelf"),
            (ATTR_LOG_LEVEL, "verbose"),
            (ATTR_FAILURE_DISPLAY, "toast"),
        ]);
        let (config, errors) = ShelfRefreshConfig::from_attributes_lossy(|name| {
            attrs.get(name).map(|v| v.to_string())
        });
        assert_eq!(config.shelf_element_id, "movement_shelf");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.failure_display, FailureDisplay::SentinelOnly);
        assert_eq!(
            errors,
            vec![
                ConfigError::FailureDisplay("toast".to_string()),
                ConfigError::LogLevel("verbose".to_string()),
            ]
        );
    }

    #[test]
    fn test_from_json_partial() {
        let config =
            ShelfRefreshConfig::from_json(r#"{"shelf_element_id":"dest_shelf","failure_display":"placeholder"}"#)
                .unwrap();
        assert_eq!(config.warehouse_element_id, "warehouse_id");
        assert_eq!(config.shelf_element_id, "dest_shelf");
        assert_eq!(config.failure_display, FailureDisplay::Placeholder);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            ShelfRefreshConfig::from_json("{"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ShelfRefreshConfig::from_json(r#"{"failure_display":"nope"}"#),
            Err(ConfigError::Json(_))
        ));
        assert_eq!(
            ShelfRefreshConfig::from_json(r#"{"shelves_url":""}"#),
            Err(ConfigError::Empty("shelves_url"))
        );
    }
}
