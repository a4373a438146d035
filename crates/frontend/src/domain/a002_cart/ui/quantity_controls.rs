use crate::layout::global_context::use_global;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_product::Product;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize};

/// "Add to Cart" while the product is not in the cart, `- n +` afterwards.
#[component]
pub fn QuantityControls(product: &'static Product) -> impl IntoView {
    let ctx = use_global();
    let toasts = use_toasts();
    let key = product.key();
    let quantity = move || ctx.quantity_of(key);

    let add = move |_: MouseEvent| {
        ctx.add_to_cart(product);
        toasts.success(format!("{} added to cart", product.name));
    };
    let increment = move |_: MouseEvent| {
        ctx.increment(product);
    };
    let decrement = move |_: MouseEvent| {
        if ctx.decrement(key) == 0 {
            toasts.info(format!("{} removed from cart", product.name));
        }
    };

    view! {
        <Show
            when=move || { quantity() > 0 }
            fallback=move || view! {
                <Button appearance=ButtonAppearance::Primary class="add-to-cart" on_click=add>
                    "Add to Cart"
                </Button>
            }
        >
            <div class="quantity-controls">
                <Button size=ButtonSize::Small on_click=decrement attr:aria-label="Decrease quantity">
                    "-"
                </Button>
                <span class="quantity-controls__value">{quantity}</span>
                <Button size=ButtonSize::Small on_click=increment attr:aria-label="Increase quantity">
                    "+"
                </Button>
            </div>
        </Show>
    }
}
