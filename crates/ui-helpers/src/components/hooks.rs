//! Leptos hooks tying controller lifetime to the owning reactive scope.

use crate::config::{DropdownConfig, TabsConfig};
use crate::dropdown;
use crate::shared::listener::Subscription;
use crate::tabs::{self, TabsHandle};
use leptos::html::Div;
use leptos::prelude::*;

/// Install the dropdown controller once the view is mounted.
/// Typically called once near the app root.
pub fn use_dropdowns() {
    use_dropdowns_with(DropdownConfig::default());
}

pub fn use_dropdowns_with(config: DropdownConfig) {
    // Listener closures are not Send+Sync, store locally
    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        if subscription.with_value(Option::is_some) {
            return;
        }
        match dropdown::init_dropdowns_with(config.clone()) {
            Ok(sub) => subscription.set_value(Some(sub)),
            Err(err) => log::error!("Failed to initialize dropdowns: {}", err),
        }
    });

    on_cleanup(move || {
        let _ = subscription.try_update_value(|sub| sub.take());
    });
}

/// Install the tab controller on `container` when it mounts.
///
/// The tab set is captured at that moment; if the referenced element is
/// replaced, the controller is re-installed on the new element.
pub fn use_tabs(container: NodeRef<Div>) {
    use_tabs_with(container, TabsConfig::default());
}

pub fn use_tabs_with(container: NodeRef<Div>, config: TabsConfig) {
    let handle = StoredValue::new_local(None::<TabsHandle>);

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        handle.update_value(|h| {
            h.take();
        });
        match tabs::init_tabs_with(&element, config.clone()) {
            Ok(h) => handle.set_value(Some(h)),
            Err(err) => log::error!("Failed to initialize tabs: {}", err),
        }
    });

    on_cleanup(move || {
        let _ = handle.try_update_value(|h| h.take());
    });
}
