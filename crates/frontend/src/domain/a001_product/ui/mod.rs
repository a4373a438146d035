pub mod catalog;
pub mod product_card;
pub mod shop_index;
