use crate::shared::icons::icon;
use leptos::prelude::*;

/// Text input with an optional leading icon
#[component]
pub fn Input(
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Input event handler, receives the full current value
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Icon name rendered inside the field on the left
    #[prop(optional)]
    leading_icon: Option<&'static str>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let group_class = if leading_icon.is_some() {
        "form__group form__group--with-icon"
    } else {
        "form__group"
    };

    view! {
        <div class=group_class>
            {leading_icon.map(|name| view! {
                <span class="form__icon">{icon(name)}</span>
            })}
            <input
                class="form__input"
                type="text"
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
        </div>
    }
}
