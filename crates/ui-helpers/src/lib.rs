//! Browser behavior helpers for disclosure dropdowns and accessible tab sets.
//!
//! Both controllers can be driven from Rust ([`dropdown`], [`tabs`]), from
//! JavaScript (`initDropdowns`, `initTabs`), or from Leptos
//! ([`components`]).

pub mod bindings;
pub mod components;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod shared;
pub mod tabs;

pub use config::{DropdownConfig, TabsConfig};
pub use dropdown::{init_dropdowns, init_dropdowns_with};
pub use error::InitError;
pub use shared::listener::Subscription;
pub use tabs::{init_tabs, init_tabs_with, TabsHandle};

use wasm_bindgen::prelude::wasm_bindgen;

/// Route `log` output to the browser console and install the panic hook.
///
/// Applications that already set up a logger should skip this: only the first
/// logger installed wins. Returns `false` if a logger was already set.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() -> bool {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).is_ok()
}

/// Standalone builds (plain JS usage) only; an embedding app owns its start hook.
#[cfg(feature = "start")]
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
}
