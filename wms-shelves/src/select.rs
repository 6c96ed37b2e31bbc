//! What the shelf control shows.

use serde::Serialize;
use std::{fmt, str::FromStr};

use crate::{error::ConfigError, shelf::ShelfOption};

/// Value of the "no shelf selected" entry.
pub const SENTINEL_VALUE: &str = "0";
/// Label of the "no shelf selected" entry.
pub const SENTINEL_LABEL: &str = "-";
/// Label of the disabled entry shown when shelves could not be loaded.
pub const UNAVAILABLE_LABEL: &str = "shelves unavailable";

/// One `<option>` in the shelf control.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct SelectEntry {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectEntry {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn sentinel() -> Self {
        Self::new(SENTINEL_VALUE, SENTINEL_LABEL)
    }

    pub fn is_sentinel(&self) -> bool {
        self.value == SENTINEL_VALUE && self.label == SENTINEL_LABEL && !self.disabled
    }
}

impl From<&ShelfOption> for SelectEntry {
    fn from(shelf: &ShelfOption) -> Self {
        Self::new(shelf.id.to_string(), shelf.code.clone())
    }
}

/// How a failed fetch shows up in the shelf control.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FailureDisplay {
    /// Sentinel only; indistinguishable from a warehouse without shelves.
    #[default]
    SentinelOnly,
    /// Sentinel plus a disabled "shelves unavailable" entry.
    Placeholder,
}

impl FromStr for FailureDisplay {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentinel" | "sentinel_only" | "sentinel-only" => Ok(FailureDisplay::SentinelOnly),
            "placeholder" => Ok(FailureDisplay::Placeholder),
            _ => Err(ConfigError::FailureDisplay(s.to_string())),
        }
    }
}

impl fmt::Display for FailureDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureDisplay::SentinelOnly => write!(f, "sentinel"),
            FailureDisplay::Placeholder => write!(f, "placeholder"),
        }
    }
}

/// Logical content of the shelf control. Rebuilt from scratch on every refresh.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub enum ShelfSelectState {
    /// No warehouse chosen, or a fetch is pending.
    #[default]
    Empty,
    Loaded(Vec<ShelfOption>),
    Unavailable,
}

impl ShelfSelectState {
    /// The state a failed fetch settles in.
    pub fn failed(display: FailureDisplay) -> Self {
        match display {
            FailureDisplay::SentinelOnly => ShelfSelectState::Empty,
            FailureDisplay::Placeholder => ShelfSelectState::Unavailable,
        }
    }

    /// Options in render order. The sentinel is always first.
    pub fn entries(&self) -> Vec<SelectEntry> {
        let mut entries = vec![SelectEntry::sentinel()];
        match self {
            ShelfSelectState::Empty => {}
            ShelfSelectState::Loaded(shelves) => {
                entries.extend(shelves.iter().map(SelectEntry::from));
            }
            ShelfSelectState::Unavailable => entries.push(SelectEntry {
                value: String::new(),
                label: UNAVAILABLE_LABEL.to_string(),
                disabled: true,
            }),
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf(id: i64, code: &str) -> ShelfOption {
        ShelfOption { id, code: code.to_string() }
    }

    #[test]
    fn test_empty_is_sentinel_only() {
        assert_eq!(ShelfSelectState::Empty.entries(), vec![SelectEntry::sentinel()]);
    }

    #[test]
    fn test_loaded_entries_in_order() {
        let state = ShelfSelectState::Loaded(vec![shelf(5, "A1"), shelf(7, "B2")]);
        let pairs: Vec<(String, String)> = state
            .entries()
            .into_iter()
            .map(|e| (e.value, e.label))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("0".to_string(), "-".to_string()),
                ("5".to_string(), "A1".to_string()),
                ("7".to_string(), "B2".to_string()),
            ]
        );
    }

    #[test]
    fn test_loaded_with_no_shelves() {
        assert_eq!(ShelfSelectState::Loaded(Vec::new()).entries().len(), 1);
    }

    #[test]
    fn test_unavailable_placeholder_is_disabled() {
        let entries = ShelfSelectState::Unavailable.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_sentinel());
        assert!(entries[1].disabled);
        assert_eq!(entries[1].label, UNAVAILABLE_LABEL);
    }

    #[test]
    fn test_failed_state_follows_display() {
        assert_eq!(ShelfSelectState::failed(FailureDisplay::SentinelOnly), ShelfSelectState::Empty);
        assert_eq!(ShelfSelectState::failed(FailureDisplay::Placeholder), ShelfSelectState::Unavailable);
    }

    #[test]
    fn test_failure_display_parse() {
        assert_eq!("sentinel".parse::<FailureDisplay>(), Ok(FailureDisplay::SentinelOnly));
        assert_eq!(" Placeholder ".parse::<FailureDisplay>(), Ok(FailureDisplay::Placeholder));
        assert_eq!(
            "banner".parse::<FailureDisplay>(),
            Err(ConfigError::FailureDisplay("banner".to_string()))
        );
        assert_eq!(FailureDisplay::Placeholder.to_string(), "placeholder");
    }

    #[test]
    fn test_negative_id_stringified() {
        let entry = SelectEntry::from(&shelf(-4, "X"));
        assert_eq!(entry.value, "-4");
    }
}
