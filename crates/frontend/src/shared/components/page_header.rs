use super::card_animated::{animation_style, Appear};
use leptos::prelude::*;

/// Centered page heading with an optional subtitle, drops in on mount.
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <header class="page-header" style=animation_style(Appear::Drop, 0)>
            <h1 class="page-header__title">{title}</h1>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </header>
    }
}
