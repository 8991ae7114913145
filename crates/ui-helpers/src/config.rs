//! Markup conventions the controllers rely on.
//!
//! Both configs deserialize from camelCase objects with every field optional,
//! so JavaScript callers can override a single selector and keep the rest.

use serde::Deserialize;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DropdownConfig {
    /// Selector identifying a disclosure element.
    pub root_selector: String,
    /// Attribute whose presence means "open".
    pub open_attribute: String,
    /// Direct children of the root that host menu items.
    pub item_hosts: Vec<String>,
    /// Actionable descendants of an item host.
    pub item_kinds: Vec<String>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            root_selector: "details.dropdown".to_string(),
            open_attribute: "open".to_string(),
            item_hosts: vec!["ul".to_string(), "menu".to_string()],
            item_kinds: vec!["a".to_string(), "button".to_string()],
        }
    }
}

impl DropdownConfig {
    /// Selector matching every currently open disclosure element.
    pub fn open_selector(&self) -> String {
        format!("{}[{}]", self.root_selector, self.open_attribute)
    }

    /// Selector matching any actionable item, e.g. `details.dropdown > ul a`.
    pub fn item_selector(&self) -> String {
        self.item_hosts
            .iter()
            .flat_map(|host| {
                self.item_kinds
                    .iter()
                    .map(move |kind| format!("{} > {} {}", self.root_selector, host, kind))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TabsConfig {
    pub tab_selector: String,
    pub selected_attribute: String,
    /// Attribute holding the id of the tab's panel.
    pub controls_attribute: String,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            tab_selector: r#"[role="tab"]"#.to_string(),
            selected_attribute: "aria-selected".to_string(),
            controls_attribute: "aria-controls".to_string(),
        }
    }
}

/// Read an optional config object passed from JavaScript.
/// `undefined` and `null` yield the defaults.
pub fn from_js<T>(value: JsValue) -> Result<T, JsValue>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selectors() {
        let config = DropdownConfig::default();
        assert_eq!(config.open_selector(), "details.dropdown[open]");
        assert_eq!(
            config.item_selector(),
            "details.dropdown > ul a, details.dropdown > ul button, \
             details.dropdown > menu a, details.dropdown > menu button"
        );
    }

    #[test]
    fn test_item_selector_custom() {
        let config = DropdownConfig {
            root_selector: ".menu".to_string(),
            item_hosts: vec!["ol".to_string()],
            item_kinds: vec!["[role=menuitem]".to_string()],
            ..DropdownConfig::default()
        };
        assert_eq!(config.item_selector(), ".menu > ol [role=menuitem]");
    }

    #[test]
    fn test_item_selector_empty() {
        let config = DropdownConfig {
            item_hosts: Vec::new(),
            ..DropdownConfig::default()
        };
        assert_eq!(config.item_selector(), "");
    }

    #[test]
    fn test_partial_dropdown_config() {
        let config: DropdownConfig =
            serde_json::from_str(r#"{"rootSelector": "details.menu"}"#).unwrap();
        assert_eq!(config.root_selector, "details.menu");
        assert_eq!(config.open_attribute, "open");
        assert_eq!(config.open_selector(), "details.menu[open]");
    }

    #[test]
    fn test_tabs_config() {
        let config: TabsConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TabsConfig::default());

        let config: TabsConfig =
            serde_json::from_str(r#"{"controlsAttribute": "data-panel"}"#).unwrap();
        assert_eq!(config.controls_attribute, "data-panel");
        assert_eq!(config.tab_selector, r#"[role="tab"]"#);
    }
}
