//! Dropdown controller: closes `<details class="dropdown">` elements when a
//! click lands outside them or on one of their menu items.

use crate::config::DropdownConfig;
use crate::error::InitError;
use crate::shared::dom;
use crate::shared::listener::{EventListener, Subscription};
use std::rc::Rc;
use web_sys::{Document, Event};

/// Install the dropdown controller on the current document with the default
/// markup conventions.
pub fn init_dropdowns() -> Result<Subscription, InitError> {
    init_dropdowns_with(DropdownConfig::default())
}

pub fn init_dropdowns_with(config: DropdownConfig) -> Result<Subscription, InitError> {
    let document = dom::document()?;
    let config = Rc::new(config);

    // Registration order matters: outside check runs before the item check.
    let outside = {
        let doc = document.clone();
        let config = Rc::clone(&config);
        EventListener::new(&document, "click", move |event: Event| {
            close_outside(&doc, &config, &event);
        })?
    };
    let item = {
        let config = Rc::clone(&config);
        EventListener::new(&document, "click", move |event: Event| {
            close_on_item(&config, &event);
        })?
    };

    log::debug!(
        "ui-helpers: dropdowns initialized for `{}`",
        config.root_selector
    );
    Ok(Subscription::new(vec![outside, item]))
}

/// Close every open dropdown whose subtree does not contain the click target.
fn close_outside(document: &Document, config: &DropdownConfig, event: &Event) {
    let target = dom::target_node(event);
    for dropdown in dom::query_document(document, &config.open_selector()) {
        if !dropdown.contains(target.as_ref()) {
            log::trace!("ui-helpers: closing dropdown on outside click");
            let _ = dropdown.remove_attribute(&config.open_attribute);
        }
    }
}

/// Close the dropdown owning the clicked menu item, if any.
fn close_on_item(config: &DropdownConfig, event: &Event) {
    let Some(target) = dom::target_element(event) else {
        return;
    };
    let Some(item) = dom::closest(&target, &config.item_selector()) else {
        return;
    };
    if let Some(dropdown) = dom::closest(&item, &config.root_selector) {
        log::trace!("ui-helpers: closing dropdown on item selection");
        let _ = dropdown.remove_attribute(&config.open_attribute);
    }
}
