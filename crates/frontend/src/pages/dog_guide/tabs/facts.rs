use crate::shared::components::card_animated::{stagger_delay, Appear, CardAnimated};
use crate::shared::components::ui::Badge;
use contracts::domain::facts::numbered_facts;
use leptos::prelude::*;

#[component]
pub fn FactsTab() -> impl IntoView {
    view! {
        <div class="stack">
            <For
                each=numbered_facts
                key=|fact| fact.position
                children=|fact| {
                    view! {
                        <CardAnimated
                            appear=Appear::SlideFromLeft
                            delay_ms=stagger_delay(fact.position - 1)
                        >
                            <div class="card-content fact-card">
                                <Badge class="fact-card__badge">
                                    {fact.position}
                                </Badge>
                                <p>{fact.text}</p>
                            </div>
                        </CardAnimated>
                    }
                }
            />
        </div>
    }
}
