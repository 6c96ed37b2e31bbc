use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One shelf as returned by `GET /stock/api/shelves`.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ShelfOption {
    pub id: i64,
    pub code: String,
}

impl ShelfOption {
    /// Decode a response body (JSON array of `{id, code}`), keeping server order.
    pub fn parse_list(body: &str) -> Result<Vec<ShelfOption>> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Current value of the warehouse control. Opaque: usually a
/// string-encoded integer, or empty when nothing is chosen.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct WarehouseSelection(String);

impl WarehouseSelection {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Only the empty string counts as "no warehouse"; `"0"` is still fetched.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for WarehouseSelection {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WarehouseSelection {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;

    #[test]
    fn test_parse_list_keeps_order() {
        let body = r#"[{"id":7,"code":"B2"},{"id":5,"code":"A1"}]"#;
        let shelves = ShelfOption::parse_list(body).unwrap();
        assert_eq!(
            shelves,
            vec![
                ShelfOption { id: 7, code: "B2".to_string() },
                ShelfOption { id: 5, code: "A1".to_string() },
            ]
        );
    }

    #[test]
    fn test_parse_list_empty_array() {
        assert!(ShelfOption::parse_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_list_malformed() {
        let err = ShelfOption::parse_list("<html>login</html>").unwrap_err();
        assert!(matches!(err, ShelfError::Decode(_)));

        let err = ShelfOption::parse_list(r#"[{"id":"x","code":"A1"}]"#).unwrap_err();
        assert!(matches!(err, ShelfError::Decode(_)));
    }

    #[test]
    fn test_parse_list_ignores_extra_fields() {
        let body = r#"[{"id":1,"code":"R-01","description":"top rack"}]"#;
        let shelves = ShelfOption::parse_list(body).unwrap();
        assert_eq!(shelves[0].code, "R-01");
    }

    #[test]
    fn test_selection_emptiness() {
        assert!(WarehouseSelection::new("").is_empty());
        assert!(!WarehouseSelection::new("0").is_empty());
        assert!(!WarehouseSelection::from("3").is_empty());
        assert!(WarehouseSelection::default().is_empty());
    }
}
