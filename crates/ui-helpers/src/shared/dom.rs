//! Small lookups over the live document shared by both controllers.

use crate::error::InitError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, Node};

pub fn document() -> Result<Document, InitError> {
    let Some(window) = web_sys::window() else {
        return Err(InitError::NoWindow);
    };
    window.document().ok_or(InitError::NoDocument)
}

/// Event target as an element, if it is one (text nodes and the window are not).
pub fn target_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

pub fn target_node(event: &Event) -> Option<Node> {
    event.target()?.dyn_into::<Node>().ok()
}

/// `Element.closest` with selector errors treated as "no match".
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&nodes)
}

/// All elements in the document matching `selector`, in document order.
pub fn query_document(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    collect_elements(&nodes)
}

fn collect_elements(nodes: &web_sys::NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn html_element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}
