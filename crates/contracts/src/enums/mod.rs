pub mod page_tab;
