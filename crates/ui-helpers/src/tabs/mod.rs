//! Tab controller implementing the WAI-ARIA tabs pattern with a roving
//! tabindex: click selects, ArrowLeft/ArrowRight move with wrap-around,
//! Home/End jump to the ends.
//!
//! The set of tabs is captured once when the controller is installed. Tabs
//! added later are not tracked until [`TabsHandle::refresh`] is called.

pub mod nav;

use crate::config::TabsConfig;
use crate::error::InitError;
use crate::shared::dom;
use crate::shared::listener::{EventListener, Subscription};
use nav::{selection_states, NavKey};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

type TabSnapshot = Rc<RefCell<Vec<HtmlElement>>>;

/// Live tab controller bound to one container.
#[must_use = "dropping a TabsHandle detaches its listeners"]
#[derive(Debug)]
pub struct TabsHandle {
    container: HtmlElement,
    config: Rc<TabsConfig>,
    tabs: TabSnapshot,
    subscription: Subscription,
}

impl TabsHandle {
    /// Remove the click and keydown listeners from the container.
    pub fn cleanup(&mut self) {
        self.subscription.cleanup();
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }

    /// Re-read the container's tabs.
    pub fn refresh(&self) {
        let tabs = snapshot(&self.container, &self.config);
        log::debug!("ui-helpers: tab set refreshed ({} tabs)", tabs.len());
        *self.tabs.borrow_mut() = tabs;
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.borrow().len()
    }

    /// Keep the controller installed for the rest of the page lifetime.
    pub fn forget(self) {
        self.subscription.forget();
    }
}

pub fn init_tabs(container: &HtmlElement) -> Result<TabsHandle, InitError> {
    init_tabs_with(container, TabsConfig::default())
}

pub fn init_tabs_with(container: &HtmlElement, config: TabsConfig) -> Result<TabsHandle, InitError> {
    let document = dom::document()?;
    let config = Rc::new(config);
    let tabs: TabSnapshot = Rc::new(RefCell::new(snapshot(container, &config)));

    let click = {
        let document = document.clone();
        let config = Rc::clone(&config);
        let tabs = Rc::clone(&tabs);
        EventListener::new(container, "click", move |event: Event| {
            let Some(target) = dom::target_element(&event) else {
                return;
            };
            let Some(tab) = dom::closest(&target, &config.tab_selector)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let tabs = tabs.borrow().clone();
            select_tab(&document, &config, &tabs, &tab);
        })?
    };

    let keydown = {
        let config = Rc::clone(&config);
        let tabs = Rc::clone(&tabs);
        EventListener::new(container, "keydown", move |event: Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let tabs = tabs.borrow().clone();
            let Some(current) = focused_index(&document, &tabs) else {
                return;
            };
            let Some(next) = NavKey::from_key(&event.key())
                .and_then(|key| key.target_index(current, tabs.len()))
            else {
                return;
            };
            event.prevent_default();
            log::trace!("ui-helpers: tab {} -> {} via `{}`", current, next, event.key());
            select_tab(&document, &config, &tabs, &tabs[next]);
        })?
    };

    log::debug!(
        "ui-helpers: tabs initialized ({} tabs)",
        tabs.borrow().len()
    );
    Ok(TabsHandle {
        container: container.clone(),
        config,
        tabs,
        subscription: Subscription::new(vec![click, keydown]),
    })
}

fn snapshot(container: &HtmlElement, config: &TabsConfig) -> Vec<HtmlElement> {
    dom::query_all(container, &config.tab_selector)
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Position of the focused element within the tracked tabs.
fn focused_index(document: &Document, tabs: &[HtmlElement]) -> Option<usize> {
    let active = document.active_element()?;
    tabs.iter().position(|tab| {
        let tab: &Element = tab;
        *tab == active
    })
}

/// Apply selection state to every tracked tab and its panel, then focus `chosen`.
fn select_tab(document: &Document, config: &TabsConfig, tabs: &[HtmlElement], chosen: &HtmlElement) {
    let chosen_index = tabs.iter().position(|tab| tab == chosen);

    for (tab, state) in tabs.iter().zip(selection_states(tabs.len(), chosen_index)) {
        let _ = tab.set_attribute(&config.selected_attribute, state.aria_selected());
        let _ = tab.set_attribute("tabindex", state.tab_index());

        // Panels are looked up on every selection, never cached.
        let Some(panel_id) = tab.get_attribute(&config.controls_attribute) else {
            continue;
        };
        if let Some(panel) = dom::html_element_by_id(document, &panel_id) {
            panel.set_hidden(state.panel_hidden());
        }
    }

    let _ = chosen.focus();
}
