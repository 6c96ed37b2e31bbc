//! `ShelfSource` over the browser's `fetch`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;
use wms_shelves::{ShelfError, ShelfOption, ShelfSource};

/// Same-origin GET; the session cookie goes along with the default
/// credentials mode.
#[derive(Default)]
pub struct FetchShelfSource;

fn transport(err: JsValue) -> ShelfError {
    ShelfError::Transport(
        err.as_string()
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

impl ShelfSource for FetchShelfSource {
    async fn fetch_shelves(&self, url: &str) -> Result<Vec<ShelfOption>, ShelfError> {
        let window = web_sys::window()
            .ok_or_else(|| ShelfError::Transport("window object not found".to_string()))?;

        let value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(transport)?;
        let response: Response = value.dyn_into().map_err(transport)?;
        if !response.ok() {
            return Err(ShelfError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        let body = text
            .as_string()
            .ok_or_else(|| ShelfError::Transport("response body is not text".to_string()))?;
        ShelfOption::parse_list(&body)
    }
}
