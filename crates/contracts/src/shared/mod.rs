pub mod page_copy;
pub mod page_state;
