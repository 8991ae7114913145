//! Owned DOM event listeners.
//!
//! A listener stays registered exactly as long as its [`EventListener`] value
//! lives: dropping it removes the callback from the target before the wasm
//! closure is freed, so the browser never calls into a dropped closure.

use crate::error::InitError;
use std::fmt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Option<Closure<dyn FnMut(Event)>>,
}

impl EventListener {
    /// Register `handler` for `event_type` on `target` (bubble phase).
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, InitError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|err| InitError::listener(event_type, err))?;

        Ok(Self {
            target: target.clone(),
            event_type,
            callback: Some(callback),
        })
    }

    /// Keep the listener registered for the rest of the page lifetime.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            let _ = self
                .target
                .remove_event_listener_with_callback(self.event_type, callback.as_ref().unchecked_ref());
        }
    }
}

impl fmt::Debug for EventListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .field("registered", &self.callback.is_some())
            .finish()
    }
}

/// A group of listeners installed by one controller instance.
///
/// [`Subscription::cleanup`] detaches everything and may be called any number
/// of times; dropping the subscription has the same effect.
#[must_use = "dropping a Subscription detaches its listeners"]
#[derive(Debug, Default)]
pub struct Subscription {
    listeners: Vec<EventListener>,
}

impl Subscription {
    pub fn new(listeners: Vec<EventListener>) -> Self {
        Self { listeners }
    }

    pub fn cleanup(&mut self) {
        if !self.listeners.is_empty() {
            log::debug!("ui-helpers: detaching {} listener(s)", self.listeners.len());
        }
        self.listeners.clear();
    }

    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Leak the listeners so they outlive this value.
    pub fn forget(mut self) {
        for listener in self.listeners.drain(..) {
            listener.forget();
        }
    }
}
