use leptos::prelude::*;

/// Disclosure dropdown rendered with the markup the dropdown controller expects:
/// `<details class="dropdown"><summary/><ul>items</ul></details>`.
///
/// Children should be `<li>` elements holding links or buttons. Closing on
/// outside click and on item selection requires [`use_dropdowns`](super::use_dropdowns)
/// somewhere in the app.
#[component]
pub fn Dropdown(
    /// Summary text shown while closed
    #[prop(into)]
    label: String,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Menu items
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <details class=move || format!("dropdown {}", additional_class())>
            <summary>{label}</summary>
            <ul>{children()}</ul>
        </details>
    }
}
