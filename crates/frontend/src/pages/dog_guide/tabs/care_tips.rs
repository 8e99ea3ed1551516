use crate::shared::components::card_animated::{stagger_delay, Appear, CardAnimated};
use contracts::domain::care_tips::CARE_TIPS;
use leptos::prelude::*;

#[component]
pub fn CareTipsTab() -> impl IntoView {
    view! {
        <div class="stack">
            <For
                each=move || CARE_TIPS.into_iter().enumerate()
                key=|(_, tip)| tip.title
                children=|(index, tip)| {
                    view! {
                        <CardAnimated appear=Appear::Rise delay_ms=stagger_delay(index)>
                            <div class="card-header">
                                <h3 class="card-header__title card-header__title--small">
                                    {tip.title}
                                </h3>
                            </div>
                            <div class="card-content">
                                <p>{tip.description}</p>
                            </div>
                        </CardAnimated>
                    }
                }
            />
        </div>
    }
}
