//! `web-sys` implementations of the control traits.
//!
//! Elements are looked up by id on every access, so a control removed from
//! the page (or swapped out by a partial re-render) simply reads as absent.

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement};
use wms_shelves::{SelectEntry, ShelfControl, WarehouseControl, WarehouseSelection};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// The `<select>` with this id, if present. Non-select elements read as absent.
pub fn select_by_id(id: &str) -> Option<HtmlSelectElement> {
    let element = document()?.get_element_by_id(id)?;
    match element.dyn_into::<HtmlSelectElement>() {
        Ok(select) => Some(select),
        Err(_) => {
            debug!("#{id} is not a <select>");
            None
        }
    }
}

pub struct DomWarehouseControl {
    element_id: String,
}

impl DomWarehouseControl {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl WarehouseControl for DomWarehouseControl {
    fn selection(&self) -> Option<WarehouseSelection> {
        select_by_id(&self.element_id).map(|select| WarehouseSelection::new(select.value()))
    }
}

pub struct DomShelfControl {
    element_id: String,
}

impl DomShelfControl {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }
}

impl ShelfControl for DomShelfControl {
    fn is_present(&self) -> bool {
        select_by_id(&self.element_id).is_some()
    }

    fn render(&self, entries: &[SelectEntry]) {
        let Some(select) = select_by_id(&self.element_id) else {
            return;
        };
        select.set_length(0);
        for entry in entries {
            let option = match HtmlOptionElement::new_with_text_and_value(&entry.label, &entry.value) {
                Ok(option) => option,
                Err(err) => {
                    warn!("could not create shelf option {:?}: {err:?}", entry.label);
                    continue;
                }
            };
            option.set_disabled(entry.disabled);
            if let Err(err) = select.append_child(&option) {
                warn!("could not append shelf option {:?}: {err:?}", entry.label);
            }
        }
    }
}
