//! Leptos integration tests, run in a browser with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use ui_helpers::components::{Dropdown, TabItem, TabList, TabPanel};
use ui_helpers::init_dropdowns;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

wasm_bindgen_test_configure!(run_in_browser);

fn fixture() -> HtmlElement {
    let doc = web_sys::window().unwrap().document().unwrap();
    let container = doc
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    doc.body().unwrap().append_child(&container).unwrap();
    container
}

fn find(root: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    let nodes = root.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

#[wasm_bindgen_test]
async fn tab_list_renders_and_navigates() {
    let _ = any_spawner::Executor::init_wasm_bindgen();
    let root = fixture();
    let mounted = leptos::mount::mount_to(root.clone(), || {
        view! {
            <TabList
                tabs=vec![TabItem::new("First", "cmp-a"), TabItem::new("Second", "cmp-b")]
                label="Sections"
            />
            <TabPanel id="cmp-a">"a"</TabPanel>
            <TabPanel id="cmp-b" hidden=true>"b"</TabPanel>
        }
    });
    // let the mount effect install the controller
    TimeoutFuture::new(0).await;

    let tabs = find(&root, r#"[role="tab"]"#);
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].get_attribute("aria-selected").as_deref(), Some("true"));
    assert_eq!(tabs[1].get_attribute("tabindex").as_deref(), Some("-1"));

    tabs[1].click();

    let panels = find(&root, r#"[role="tabpanel"]"#);
    assert_eq!(tabs[1].get_attribute("aria-selected").as_deref(), Some("true"));
    assert_eq!(tabs[0].get_attribute("tabindex").as_deref(), Some("-1"));
    assert!(panels[0].hidden());
    assert!(!panels[1].hidden());

    drop(mounted);
    root.remove();
}

#[wasm_bindgen_test]
async fn dropdown_component_matches_controller_markup() {
    let _ = any_spawner::Executor::init_wasm_bindgen();
    let root = fixture();
    let mounted = leptos::mount::mount_to(root.clone(), || {
        view! {
            <Dropdown label="Menu" class="compact">
                <li><button type="button" class="cmp-item">"Go"</button></li>
            </Dropdown>
        }
    });
    TimeoutFuture::new(0).await;
    let _sub = init_dropdowns().unwrap();

    let details = find(&root, "details.dropdown.compact");
    assert_eq!(details.len(), 1);
    details[0].set_attribute("open", "").unwrap();

    find(&root, ".cmp-item")[0].click();
    assert!(!details[0].has_attribute("open"));

    drop(mounted);
    root.remove();
}
