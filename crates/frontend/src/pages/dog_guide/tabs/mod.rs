//! Содержимое вкладок

pub mod breeds;
pub mod care_tips;
pub mod facts;

pub use breeds::BreedsTab;
pub use care_tips::CareTipsTab;
pub use facts::FactsTab;
