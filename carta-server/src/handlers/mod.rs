pub mod category_handlers;
pub mod menu_handlers;
pub mod product_handlers;
