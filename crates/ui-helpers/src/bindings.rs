//! JavaScript entry points. Each returns a zero-argument cleanup function.

use crate::config::{self, DropdownConfig, TabsConfig};
use crate::dropdown;
use crate::tabs;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// `initDropdowns(config?) => () => void`
#[wasm_bindgen(js_name = initDropdowns)]
pub fn init_dropdowns(config: JsValue) -> Result<js_sys::Function, JsValue> {
    let config: DropdownConfig = config::from_js(config)?;
    let subscription = dropdown::init_dropdowns_with(config)?;
    Ok(cleanup_fn(subscription))
}

/// `initTabs(tablist, config?) => () => void`
#[wasm_bindgen(js_name = initTabs)]
pub fn init_tabs(container: HtmlElement, config: JsValue) -> Result<js_sys::Function, JsValue> {
    let config: TabsConfig = config::from_js(config)?;
    let handle = tabs::init_tabs_with(&container, config)?;
    Ok(cleanup_fn(handle))
}

/// Wrap an owned controller in a JS function that drops it on first call.
/// Later calls find the slot empty and do nothing.
fn cleanup_fn<T: 'static>(owned: T) -> js_sys::Function {
    let slot = Rc::new(RefCell::new(Some(owned)));
    let cleanup = Closure::wrap(Box::new(move || {
        let taken = slot.borrow_mut().take();
        drop(taken);
    }) as Box<dyn FnMut()>);
    cleanup.into_js_value().unchecked_into()
}
