use leptos::prelude::*;

/// Small pill with muted background
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge badge--secondary {}", additional_class())>
            {children()}
        </span>
    }
}
