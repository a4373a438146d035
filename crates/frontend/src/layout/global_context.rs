use contracts::domain::a001_product::{Product, ProductKey};
use contracts::domain::a002_cart::CartLedger;
use contracts::domain::common::Price;
use leptos::prelude::*;

/// Session-wide store provided at the app root.
///
/// The cart is the single source of truth for quantities: product cards,
/// the navbar counter and the cart page all read from it.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub cart: RwSignal<CartLedger>,
    pub mobile_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            cart: RwSignal::new(CartLedger::new()),
            mobile_menu_open: RwSignal::new(false),
        }
    }

    /// Add with quantity 1 unless already in the cart
    pub fn add_to_cart(&self, product: &Product) -> u32 {
        let mut quantity = 0;
        self.cart.update(|cart| quantity = cart.add(product));
        log::debug!("add_to_cart: {} -> {}", product.key(), quantity);
        quantity
    }

    pub fn increment(&self, product: &Product) -> u32 {
        let mut quantity = 0;
        self.cart.update(|cart| quantity = cart.increment(product));
        log::debug!("increment: {} -> {}", product.key(), quantity);
        quantity
    }

    pub fn decrement(&self, key: ProductKey) -> u32 {
        let mut quantity = 0;
        self.cart.update(|cart| quantity = cart.decrement(key));
        log::debug!("decrement: {} -> {}", key, quantity);
        quantity
    }

    pub fn set_quantity(&self, product: &Product, quantity: u32) -> u32 {
        let mut result = 0;
        self.cart
            .update(|cart| result = cart.set_quantity(product, quantity));
        log::debug!("set_quantity: {} -> {}", product.key(), result);
        result
    }

    pub fn remove_from_cart(&self, key: ProductKey) {
        let mut removed = false;
        self.cart.update(|cart| removed = cart.remove(key));
        log::debug!("remove_from_cart: {} (removed: {})", key, removed);
    }

    pub fn clear_cart(&self) {
        self.cart.update(CartLedger::clear);
        log::debug!("clear_cart");
    }

    /// Reactive quantity of one product
    pub fn quantity_of(&self, key: ProductKey) -> u32 {
        self.cart.with(|cart| cart.quantity(key))
    }

    /// Reactive sum of all quantities
    pub fn cart_count(&self) -> u32 {
        self.cart.with(CartLedger::total_quantity)
    }

    pub fn subtotal(&self) -> Price {
        self.cart.with(CartLedger::subtotal)
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.update(|open| *open = !*open);
    }

    pub fn close_mobile_menu(&self) {
        self.mobile_menu_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
