use leptos::prelude::*;

/// Outline button without a click target
#[component]
pub fn Button(
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("button button--outline {}", additional_class())
        >
            {children()}
        </button>
    }
}
