//! Listener lifecycle for one warehouse/shelf pair.
//!
//! A `ShelfBinding` owns the `change` listener it attached; dropping it (or
//! calling `detach()` from JS) removes the listener again, so a component
//! can bind on mount and unbind on unmount.

use js_sys::Promise;
use log::{debug, warn};
use std::{future::Future, rc::Rc};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{Event, EventTarget};
use wms_shelves::{
    config::ShelfRefreshConfig, endpoint::ShelvesEndpoint, ShelfControl, ShelfRefresher,
    ShelfSource, WarehouseControl,
};

use crate::{
    dom::{self, DomShelfControl, DomWarehouseControl},
    fetch::FetchShelfSource,
};

type PageRefresher = ShelfRefresher<DomWarehouseControl, DomShelfControl, FetchShelfSource>;

const CHANGE_EVENT: &str = "change";

#[wasm_bindgen]
pub struct ShelfBinding {
    target: EventTarget,
    refresher: Rc<PageRefresher>,
    on_change: Closure<dyn FnMut(Event)>,
}

impl ShelfBinding {
    /// Attach to the warehouse control named in `config`. `Ok(None)` when
    /// that control is not on the page.
    pub fn attach(config: &ShelfRefreshConfig) -> Result<Option<ShelfBinding>, JsValue> {
        let Some(warehouse) = dom::select_by_id(&config.warehouse_element_id) else {
            debug!(
                "#{} not found, shelf refresh not bound",
                config.warehouse_element_id
            );
            return Ok(None);
        };

        let refresher = Rc::new(
            ShelfRefresher::new(
                DomWarehouseControl::new(config.warehouse_element_id.clone()),
                DomShelfControl::new(config.shelf_element_id.clone()),
                FetchShelfSource,
                ShelvesEndpoint::new(config.shelves_url.clone()),
            )
            .with_failure_display(config.failure_display),
        );

        let handle = Rc::clone(&refresher);
        let on_change = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            spawn_local(on_warehouse_change(&handle));
        });
        warehouse.add_event_listener_with_callback(CHANGE_EVENT, on_change.as_ref().unchecked_ref())?;
        debug!(
            "shelf refresh bound: #{} -> #{}",
            config.warehouse_element_id, config.shelf_element_id
        );

        Ok(Some(ShelfBinding {
            target: warehouse.into(),
            refresher,
            on_change,
        }))
    }
}

/// Work scheduled by one `change` event: a single refresh, outcome dropped.
fn on_warehouse_change<W, C, S>(
    refresher: &Rc<ShelfRefresher<W, C, S>>,
) -> impl Future<Output = ()> + 'static
where
    W: WarehouseControl + 'static,
    C: ShelfControl + 'static,
    S: ShelfSource + 'static,
{
    let refresher = Rc::clone(refresher);
    async move {
        refresher.refresh().await;
    }
}

#[wasm_bindgen]
impl ShelfBinding {
    /// Run one refresh now. Resolves to the outcome name
    /// (`"loaded"`, `"cleared"`, `"failed"`, `"superseded"`, `"skipped"`).
    pub fn refresh(&self) -> Promise {
        let refresher = Rc::clone(&self.refresher);
        future_to_promise(async move {
            let outcome = refresher.refresh().await;
            Ok(JsValue::from_str(outcome.as_str()))
        })
    }

    /// Remove the listener and release the binding.
    pub fn detach(self) {}
}

impl Drop for ShelfBinding {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(CHANGE_EVENT, self.on_change.as_ref().unchecked_ref())
        {
            warn!("could not remove shelf refresh listener: {err:?}");
        }
    }
}
