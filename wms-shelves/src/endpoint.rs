use url::form_urlencoded;

use crate::shelf::WarehouseSelection;

/// Path of the shelves-by-warehouse endpoint on the stock blueprint.
pub const DEFAULT_SHELVES_PATH: &str = "/stock/api/shelves";

/// Query parameter carrying the warehouse id.
pub const WAREHOUSE_PARAM: &str = "warehouse_id";

/// Builds `GET <base>?warehouse_id=<id>` URLs. `base` may be a path
/// (browser, same origin) or an absolute URL (CLI).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShelvesEndpoint {
    base: String,
}

impl Default for ShelvesEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_SHELVES_PATH)
    }
}

impl ShelvesEndpoint {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Endpoint under a server root, e.g. `http://localhost:5000`.
    pub fn under_origin(origin: &str) -> Self {
        Self::new(format!("{}{}", origin.trim_end_matches('/'), DEFAULT_SHELVES_PATH))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Form encoding: a space becomes `+` rather than `%20`; the server's
    /// query parser decodes both to the same value.
    pub fn url_for(&self, selection: &WarehouseSelection) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(WAREHOUSE_PARAM, selection.as_str())
            .finish();
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.base, separator, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let endpoint = ShelvesEndpoint::default();
        assert_eq!(
            endpoint.url_for(&"3".into()),
            "/stock/api/shelves?warehouse_id=3"
        );
    }

    #[test]
    fn test_value_is_encoded() {
        let endpoint = ShelvesEndpoint::default();
        assert_eq!(
            endpoint.url_for(&"3&x=1".into()),
            "/stock/api/shelves?warehouse_id=3%26x%3D1"
        );
        assert_eq!(
            endpoint.url_for(&"Ana Depo".into()),
            "/stock/api/shelves?warehouse_id=Ana+Depo"
        );
    }

    #[test]
    fn test_existing_query_is_kept() {
        let endpoint = ShelvesEndpoint::new("/stock/api/shelves?active=1");
        assert_eq!(
            endpoint.url_for(&"12".into()),
            "/stock/api/shelves?active=1&warehouse_id=12"
        );
    }

    #[test]
    fn test_under_origin() {
        let endpoint = ShelvesEndpoint::under_origin("http://localhost:5000/");
        assert_eq!(
            endpoint.url_for(&"1".into()),
            "http://localhost:5000/stock/api/shelves?warehouse_id=1"
        );
    }
}
