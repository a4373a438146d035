use crate::domain::a001_product::{Category, Product, ProductId, ProductKey};
use crate::domain::common::Price;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product snapshot plus the purchase quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub category: Category,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
    pub quantity: u32,
}

impl CartItem {
    fn from_product(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id,
            category: product.category,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            description: product.description.clone(),
            quantity,
        }
    }

    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.category, self.id)
    }

    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Session cart: product key -> item.
///
/// Stored entries always have `quantity >= 1`; any operation that would
/// leave a zero removes the entry instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartLedger {
    items: BTreeMap<ProductKey, CartItem>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the product in the cart with quantity 1 unless it is already
    /// there. Returns the resulting quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        self.items
            .entry(product.key())
            .or_insert_with(|| CartItem::from_product(product, 1))
            .quantity
    }

    pub fn increment(&mut self, product: &Product) -> u32 {
        let item = self
            .items
            .entry(product.key())
            .or_insert_with(|| CartItem::from_product(product, 0));
        item.quantity = item.quantity.saturating_add(1);
        item.quantity
    }

    /// Lower the quantity by one, removing the entry when it reaches zero.
    /// Absent keys are left alone.
    pub fn decrement(&mut self, key: ProductKey) -> u32 {
        let Some(item) = self.items.get_mut(&key) else {
            return 0;
        };
        if item.quantity > 1 {
            item.quantity -= 1;
            item.quantity
        } else {
            self.items.remove(&key);
            0
        }
    }

    /// Absolute write of the quantity; zero removes the entry.
    pub fn set_quantity(&mut self, product: &Product, quantity: u32) -> u32 {
        if quantity == 0 {
            self.items.remove(&product.key());
            return 0;
        }
        self.items
            .entry(product.key())
            .and_modify(|item| item.quantity = quantity)
            .or_insert_with(|| CartItem::from_product(product, quantity))
            .quantity
    }

    pub fn remove(&mut self, key: ProductKey) -> bool {
        self.items.remove(&key).is_some()
    }

    pub fn quantity(&self, key: ProductKey) -> u32 {
        self.items.get(&key).map_or(0, |item| item.quantity)
    }

    pub fn get(&self, key: ProductKey) -> Option<&CartItem> {
        self.items.get(&key)
    }

    pub fn contains(&self, key: ProductKey) -> bool {
        self.items.contains_key(&key)
    }

    /// Items ordered by category, then id
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.values()
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> u32 {
        self.items
            .values()
            .fold(0u32, |acc, item| acc.saturating_add(item.quantity))
    }

    pub fn subtotal(&self) -> Price {
        self.items.values().map(CartItem::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::find;

    fn product(category: Category, id: u32) -> &'static Product {
        find(ProductKey::new(category, ProductId(id))).unwrap()
    }

    #[test]
    fn test_add_is_idempotent() {
        let espresso = product(Category::Coffee, 1);
        let mut cart = CartLedger::new();

        assert_eq!(cart.add(espresso), 1);
        assert_eq!(cart.add(espresso), 1);
        assert_eq!(cart.quantity(espresso.key()), 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_add_keeps_existing_quantity() {
        let latte = product(Category::Coffee, 3);
        let mut cart = CartLedger::new();
        cart.set_quantity(latte, 4);

        assert_eq!(cart.add(latte), 4);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mocha = product(Category::Coffee, 4);
        let mut cart = CartLedger::new();

        assert_eq!(cart.increment(mocha), 1);
        assert_eq!(cart.increment(mocha), 2);
        assert_eq!(cart.increment(mocha), 3);
        assert_eq!(cart.decrement(mocha.key()), 2);
        assert_eq!(cart.quantity(mocha.key()), 2);
    }

    #[test]
    fn test_decrement_to_zero_removes_entry() {
        let soup = product(Category::Soup, 2);
        let mut cart = CartLedger::new();
        cart.add(soup);

        assert_eq!(cart.decrement(soup.key()), 0);
        assert!(!cart.contains(soup.key()));
        assert!(cart.is_empty());
        assert_eq!(cart.quantity(soup.key()), 0);
    }

    #[test]
    fn test_decrement_absent_is_noop() {
        let mut cart = CartLedger::new();
        let key = ProductKey::new(Category::Cake, ProductId(1));

        assert_eq!(cart.decrement(key), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let shake = product(Category::Milkshake, 4);
        let mut cart = CartLedger::new();

        assert_eq!(cart.set_quantity(shake, 5), 5);
        assert_eq!(cart.set_quantity(shake, 2), 2);
        assert_eq!(cart.set_quantity(shake, 0), 0);
        assert!(cart.get(shake.key()).is_none());
    }

    #[test]
    fn test_same_id_in_different_categories_are_separate_lines() {
        let espresso = product(Category::Coffee, 1);
        let fudge = product(Category::Cake, 1);
        let mut cart = CartLedger::new();

        cart.add(espresso);
        cart.increment(fudge);
        cart.increment(fudge);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.quantity(espresso.key()), 1);
        assert_eq!(cart.quantity(fudge.key()), 2);

        assert!(cart.remove(espresso.key()));
        assert!(!cart.remove(espresso.key()));
        assert_eq!(cart.quantity(fudge.key()), 2);
    }

    #[test]
    fn test_totals() {
        let espresso = product(Category::Coffee, 1); // $2.50
        let doppio = product(Category::Coffee, 10); // $3.40
        let mut cart = CartLedger::new();

        cart.set_quantity(espresso, 2);
        cart.set_quantity(doppio, 3);

        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.subtotal(), Price(500 + 1020));
        assert_eq!(cart.get(doppio.key()).unwrap().line_total(), Price(1020));

        cart.clear();
        assert_eq!(cart.subtotal(), Price::ZERO);
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_items_are_ordered_by_category_then_id() {
        let mut cart = CartLedger::new();
        cart.add(product(Category::Milkshake, 2));
        cart.add(product(Category::Coffee, 7));
        cart.add(product(Category::Coffee, 2));

        let keys: Vec<_> = cart.items().map(|i| i.key().to_string()).collect();
        assert_eq!(keys, vec!["coffee-2", "coffee-7", "milkshake-2"]);
    }
}
