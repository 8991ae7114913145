use super::hooks::use_tabs;
use crate::tabs::nav::TabState;
use leptos::html::Div;
use leptos::prelude::*;

/// One entry of a [`TabList`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabItem {
    pub label: String,
    /// Id of the [`TabPanel`] this tab reveals
    pub panel_id: String,
}

impl TabItem {
    pub fn new(label: impl Into<String>, panel_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            panel_id: panel_id.into(),
        }
    }
}

/// Accessible tab strip with keyboard navigation installed on mount.
#[component]
pub fn TabList(
    tabs: Vec<TabItem>,
    /// Index of the initially selected tab
    #[prop(default = 0)]
    selected: usize,
    /// Accessible name of the tab list
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let container = NodeRef::<Div>::new();
    use_tabs(container);

    view! {
        <div class="tablist" role="tablist" aria-label=label node_ref=container>
            {tabs
                .into_iter()
                .enumerate()
                .map(|(i, tab)| {
                    let state = TabState { selected: i == selected };
                    view! {
                        <button
                            type="button"
                            class="tablist__tab"
                            role="tab"
                            aria-controls=tab.panel_id
                            aria-selected=state.aria_selected()
                            tabindex=state.tab_index()
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Content panel revealed by the tab whose `panel_id` equals `id`.
#[component]
pub fn TabPanel(
    #[prop(into)]
    id: String,
    /// Initial visibility; the tab controller toggles it afterwards
    #[prop(optional)]
    hidden: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="tabpanel" role="tabpanel" id=id hidden=hidden>
            {children()}
        </div>
    }
}
