use crate::shared::icons::icon;
use contracts::enums::page_tab::PageTab;
use leptos::prelude::*;

/// Three-way tab selector. Clicking a trigger always selects its tab.
#[component]
pub fn TabStrip(
    #[prop(into)] active: Signal<PageTab>,
    on_select: Callback<PageTab>,
) -> impl IntoView {
    view! {
        <div class="tab-strip" role="tablist">
            {PageTab::all()
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="tab-strip__trigger"
                            class:active=move || active.get() == tab
                            aria-selected=move || (active.get() == tab).to_string()
                            data-tab=tab.code()
                            on:click=move |_| on_select.run(tab)
                        >
                            {icon(tab.icon_name())}
                            <span>{tab.display_name()}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
