//! All About Dogs — единственная страница приложения.
//!
//! Контейнер держит поле поиска и переключатель из трёх вкладок,
//! содержимое вкладок статично и берётся из `contracts::domain`.

pub mod page;
pub mod tab_strip;
pub mod tabs;
pub mod view_model;

pub use page::DogGuidePage;
