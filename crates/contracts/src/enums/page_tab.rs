/// Вкладки страницы: какой из трёх разделов сейчас показан
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageTab {
    #[default]
    Breeds,
    Facts,
    Care,
}

/// Заголовок карточки раздела
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
}

impl PageTab {
    /// Стабильный код вкладки (атрибут `data-tab`, логи)
    pub fn code(&self) -> &'static str {
        match self {
            PageTab::Breeds => "breeds",
            PageTab::Facts => "facts",
            PageTab::Care => "care",
        }
    }

    /// Подпись на кнопке вкладки
    pub fn display_name(&self) -> &'static str {
        match self {
            PageTab::Breeds => "Dog Breeds",
            PageTab::Facts => "Fun Facts",
            PageTab::Care => "Care Tips",
        }
    }

    /// Имя иконки для `shared::icons::icon` во фронтенде
    pub fn icon_name(&self) -> &'static str {
        match self {
            PageTab::Breeds => "paw",
            PageTab::Facts => "info",
            PageTab::Care => "heart",
        }
    }

    pub fn section(&self) -> Section {
        match self {
            PageTab::Breeds => Section {
                title: "Popular Dog Breeds",
                description: "Explore some of the most beloved dog breeds and their unique traits.",
            },
            PageTab::Facts => Section {
                title: "Fun Dog Facts",
                description: "Discover interesting and surprising facts about our canine companions.",
            },
            PageTab::Care => Section {
                title: "Dog Care Tips",
                description: "Learn how to keep your furry friend happy, healthy, and thriving.",
            },
        }
    }

    /// Все вкладки в порядке отображения
    pub fn all() -> [PageTab; 3] {
        [PageTab::Breeds, PageTab::Facts, PageTab::Care]
    }
}

impl std::fmt::Display for PageTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
