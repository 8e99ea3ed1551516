//! ViewModel страницы: сигналы поверх `PageState`.

use contracts::enums::page_tab::PageTab;
use contracts::shared::page_state::PageState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DogGuideVm {
    state: RwSignal<PageState>,

    // === Derived ===
    /// Меняется только при смене вкладки, ввод в поиск её не трогает
    pub active_tab: Memo<PageTab>,
    pub search_term: Memo<String>,
}

impl DogGuideVm {
    pub fn new() -> Self {
        let state = RwSignal::new(PageState::new());
        let active_tab = Memo::new(move |_| state.with(|s| s.active_tab()));
        let search_term = Memo::new(move |_| state.with(|s| s.search_term().to_string()));

        Self {
            state,
            active_tab,
            search_term,
        }
    }

    pub fn select_tab(&self, tab: PageTab) {
        let mut changed = false;
        self.state.update(|s| changed = s.select_tab(tab));
        if changed {
            log::debug!("active tab -> {}", tab);
        }
    }

    pub fn set_search_term(&self, term: String) {
        self.state.update(|s| s.set_search_term(term));
    }
}

impl Default for DogGuideVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Memo, зависящий только от активной вкладки, со счётчиком пересчётов
    fn section_memo(vm: DogGuideVm, runs: Arc<AtomicUsize>) -> Memo<PageTab> {
        Memo::new(move |_| {
            runs.fetch_add(1, Ordering::SeqCst);
            vm.active_tab.get()
        })
    }

    #[test]
    fn test_search_does_not_recompute_section() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = DogGuideVm::new();
            let runs = Arc::new(AtomicUsize::new(0));
            let section = section_memo(vm, runs.clone());

            assert_eq!(section.get(), PageTab::Breeds);
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            vm.set_search_term("lab".to_string());
            assert_eq!(section.get(), PageTab::Breeds);
            assert_eq!(vm.search_term.get(), "lab");
            assert_eq!(runs.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_reselecting_active_tab_does_not_recompute_section() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = DogGuideVm::new();
            let runs = Arc::new(AtomicUsize::new(0));
            let section = section_memo(vm, runs.clone());
            assert_eq!(section.get(), PageTab::Breeds);

            vm.select_tab(PageTab::Facts);
            assert_eq!(section.get(), PageTab::Facts);
            assert_eq!(runs.load(Ordering::SeqCst), 2);

            vm.select_tab(PageTab::Facts);
            assert_eq!(section.get(), PageTab::Facts);
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_search_term_survives_tab_cycle() {
        let owner = Owner::new();
        owner.with(|| {
            let vm = DogGuideVm::new();
            vm.set_search_term("poodle".to_string());

            for tab in [PageTab::Facts, PageTab::Care, PageTab::Breeds] {
                vm.select_tab(tab);
                assert_eq!(vm.active_tab.get(), tab);
                assert_eq!(vm.search_term.get(), "poodle");
            }
        });
    }
}
