//! Shelf dropdown refresh for the stock movement pages.
//!
//! Load the generated module on any page with a `#warehouse_id` select and a
//! `#shelf_id` select. Changing the warehouse refetches its shelves from
//! `/stock/api/shelves` and rewrites the shelf options. Nothing is fetched
//! on load; the server renders the initial options.
//!
//! Optional `data-*` attributes on the warehouse select:
//! - `data-shelves-url`: endpoint path (default `/stock/api/shelves`)
//! - `data-shelf-target`: id of the shelf select (default `shelf_id`)
//! - `data-shelves-failure`: `sentinel` (default) or `placeholder`
//! - `data-log-level`: `error`, `warn`, `info`, `debug`, `trace` or `off`
//!
//! Pages that mount their own controls can call `bind_shelf_refresh` with a
//! JSON config and `detach()` the returned binding on unmount.

pub mod binding;
pub mod dom;
pub mod fetch;

use log::{debug, warn, LevelFilter};
use std::cell::RefCell;
use wasm_bindgen::{prelude::*, JsCast};
use wms_shelves::config::{ShelfRefreshConfig, DEFAULT_WAREHOUSE_ELEMENT_ID};

pub use binding::ShelfBinding;

thread_local! {
    // Page-lifetime binding created on DOMContentLoaded.
    static PAGE_BINDING: RefCell<Option<ShelfBinding>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(err) = wms_log::init(LevelFilter::Info) {
        debug!("keeping the host page's logger: {err}");
    }

    let Some(document) = dom::document() else {
        return Ok(());
    };
    // The module can finish loading after DOMContentLoaded has already fired.
    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(bind_page);
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    } else {
        bind_page();
    }
    Ok(())
}

/// Read the page config off the warehouse select. An invalid attribute is
/// logged and left at its default; the others still apply.
fn page_config() -> Option<ShelfRefreshConfig> {
    let warehouse = dom::select_by_id(DEFAULT_WAREHOUSE_ELEMENT_ID)?;
    let (config, errors) =
        ShelfRefreshConfig::from_attributes_lossy(|name| warehouse.get_attribute(name));
    for err in errors {
        warn!("ignoring shelf refresh attribute: {err}");
    }
    Some(config)
}

fn apply_log_level(config: &ShelfRefreshConfig) {
    if let Ok(level) = config.level_filter() {
        log::set_max_level(level);
    }
}

fn bind_page() {
    let Some(config) = page_config() else {
        return;
    };
    apply_log_level(&config);
    match ShelfBinding::attach(&config) {
        Ok(Some(binding)) => PAGE_BINDING.with(|slot| *slot.borrow_mut() = Some(binding)),
        Ok(None) => {}
        Err(err) => warn!("could not bind shelf refresh: {err:?}"),
    }
}

/// Bind a warehouse/shelf pair described by `config_json` (all fields
/// optional, see `ShelfRefreshConfig`). Returns `undefined` when the
/// warehouse select is not in the document.
#[wasm_bindgen]
pub fn bind_shelf_refresh(config_json: Option<String>) -> Result<Option<ShelfBinding>, JsValue> {
    let config = match config_json {
        Some(json) => ShelfRefreshConfig::from_json(&json)
            .map_err(|err| JsValue::from_str(&err.to_string()))?,
        None => ShelfRefreshConfig::default(),
    };
    apply_log_level(&config);
    ShelfBinding::attach(&config)
}
