pub mod aggregate;
pub mod catalog;

pub use aggregate::{Category, Product, ProductId, ProductKey};
