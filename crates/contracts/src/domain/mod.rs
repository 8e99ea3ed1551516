//! Статический контент страницы. Всё задано литералами и не меняется.

pub mod breeds;
pub mod care_tips;
pub mod facts;
