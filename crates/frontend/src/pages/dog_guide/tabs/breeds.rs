use crate::shared::components::card_animated::{stagger_delay, Appear, CardAnimated};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::domain::breeds::{Breed, BREEDS};
use contracts::shared::page_copy::LEARN_MORE_LABEL;
use leptos::prelude::*;

#[component]
pub fn BreedsTab() -> impl IntoView {
    view! {
        <div class="breed-grid">
            <For
                each=move || BREEDS.into_iter().enumerate()
                key=|(_, breed)| breed.name
                children=|(index, breed)| view! { <BreedCard breed=breed index=index /> }
            />
        </div>
    }
}

#[component]
fn BreedCard(breed: Breed, index: usize) -> impl IntoView {
    view! {
        <CardAnimated appear=Appear::Rise delay_ms=stagger_delay(index) class="breed-card">
            <div class="card-header">
                <h3 class="card-header__title">{breed.name}</h3>
                <p class="card-header__description">{breed.temperament}</p>
            </div>
            <div class="card-content">
                <img class="breed-card__image" src=breed.image_url() alt=breed.image_alt() />
            </div>
            <div class="card-footer">
                // Без обработчика: кнопка ни на что не ведёт
                <Button class="button--block">
                    {LEARN_MORE_LABEL}
                    {icon("arrow-right")}
                </Button>
            </div>
        </CardAnimated>
    }
}
