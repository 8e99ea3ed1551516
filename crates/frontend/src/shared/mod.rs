pub mod components;
pub mod document;
pub mod icons;
