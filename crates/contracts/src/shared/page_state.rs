//! Состояние страницы: активная вкладка и текст поиска.
//!
//! Переходы между вкладками не имеют условий и терминальных состояний.
//! Текст поиска хранится, но ничем не читается (фильтрации нет).

use crate::enums::page_tab::PageTab;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    active_tab: PageTab,
    search_term: String,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> PageTab {
        self.active_tab
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Выбор вкладки. Возвращает `true`, если вкладка действительно сменилась.
    pub fn select_tab(&mut self, tab: PageTab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        self.active_tab = tab;
        true
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}
