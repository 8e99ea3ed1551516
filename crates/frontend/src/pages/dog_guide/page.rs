use super::tab_strip::TabStrip;
use super::tabs::{BreedsTab, CareTipsTab, FactsTab};
use super::view_model::DogGuideVm;
use crate::shared::components::card_animated::{Appear, CardAnimated};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Input;
use crate::shared::document::set_document_title;
use contracts::enums::page_tab::PageTab;
use contracts::shared::page_copy::{DOCUMENT_TITLE, HEADING, SEARCH_PLACEHOLDER, SUBTITLE};
use leptos::prelude::*;

#[component]
pub fn DogGuidePage() -> impl IntoView {
    let vm = DogGuideVm::new();

    // Без зависимостей: выполняется один раз после монтирования
    Effect::new(move || set_document_title(DOCUMENT_TITLE));

    view! {
        <div class="dog-guide">
            <div class="dog-guide__container">
                <PageHeader title=HEADING subtitle=SUBTITLE />

                <div class="dog-guide__search">
                    <Input
                        value=vm.search_term
                        on_input=Callback::new(move |term: String| vm.set_search_term(term))
                        placeholder=SEARCH_PLACEHOLDER
                        leading_icon="search"
                    />
                </div>

                <TabStrip
                    active=vm.active_tab
                    on_select=Callback::new(move |tab: PageTab| vm.select_tab(tab))
                />

                // Пересоздаётся при смене вкладки, поэтому анимация проигрывается заново
                {move || {
                    let tab = vm.active_tab.get();
                    let section = tab.section();
                    let content = match tab {
                        PageTab::Breeds => view! { <BreedsTab /> }.into_any(),
                        PageTab::Facts => view! { <FactsTab /> }.into_any(),
                        PageTab::Care => view! { <CareTipsTab /> }.into_any(),
                    };

                    view! {
                        <div class="dog-guide__panel" role="tabpanel" data-tab=tab.code()>
                            <CardAnimated appear=Appear::SlideFromRight class="section-card">
                                <div class="card-header">
                                    <h2 class="card-header__title card-header__title--large">
                                        {section.title}
                                    </h2>
                                    <p class="card-header__description">{section.description}</p>
                                </div>
                                <div class="card-content">{content}</div>
                            </CardAnimated>
                        </div>
                    }
                }}
            </div>
        </div>
    }
}
