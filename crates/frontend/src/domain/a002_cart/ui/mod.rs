pub mod cart_page;
pub mod quantity_controls;
