//! Тексты страницы, не относящиеся к конкретному разделу.

/// Значение `document.title`, выставляется один раз при монтировании
pub const DOCUMENT_TITLE: &str = "All About Dogs | Your Canine Companion Guide";

pub const HEADING: &str = "All About Dogs";

pub const SUBTITLE: &str = "Your ultimate guide to canine companions";

pub const SEARCH_PLACEHOLDER: &str = "Search for dog breeds, facts, or care tips...";

pub const LEARN_MORE_LABEL: &str = "Learn More";
