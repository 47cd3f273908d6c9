pub mod app;
pub mod cursor;
pub mod error_mapper;
pub mod format;
pub mod pagination;
pub mod product_cards;
pub mod product_form;
pub mod product_table;
pub mod render;
pub mod search_bar;
