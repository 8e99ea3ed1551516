use crate::pages::dog_guide::DogGuidePage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <DogGuidePage />
    }
}
