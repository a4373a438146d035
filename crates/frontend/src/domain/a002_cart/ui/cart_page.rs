use super::quantity_controls::QuantityControls;
use crate::layout::global_context::use_global;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::navigation::use_navigator;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BASKET;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_product::catalog::find;
use contracts::domain::a002_cart::CartItem;
use contracts::domain::common::Price;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance};

const MAX_LINE_QUANTITY: u32 = 99;

/// Quantity typed into a cart line. Blank or non-numeric text is rejected;
/// larger numbers are capped.
fn parse_quantity(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse::<u32>().map_or(MAX_LINE_QUANTITY, |n| n.min(MAX_LINE_QUANTITY)))
}

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_global();
    let toasts = use_toasts();
    let navigator = use_navigator();
    let config = use_config();

    let is_empty = move || ctx.cart.with(|c| c.is_empty());
    let format_price = move |price: Price| config.with_value(|c| price.format_with(&c.currency_symbol));

    let clear = move |_: MouseEvent| {
        ctx.clear_cart();
        toasts.info("Cart cleared");
    };
    let checkout = move |_: MouseEvent| navigator.go("/checkout");

    view! {
        <PageFrame page_id="a002_cart--basket" category=PAGE_CAT_BASKET>
            <header class="page__header">
                <h1 class="page__title">"Your Cart"</h1>
            </header>
            <Show
                when=move || !is_empty()
                fallback=|| view! {
                    <div class="empty-state">
                        {icon("cart")}
                        <p>"Your cart is empty."</p>
                        <A href="/shop" attr:class="empty-state__link">"Browse the menu"</A>
                    </div>
                }
            >
                <div class="cart">
                    <ul class="cart__lines">
                        <For
                            each=move || ctx.cart.with(|c| c.items().cloned().collect::<Vec<_>>())
                            key=|item| item.key()
                            children=move |item| view! { <CartLine item=item /> }
                        />
                    </ul>
                    <aside class="cart__summary">
                        <div class="cart__summary-row">
                            <span>{move || format!("Items ({})", ctx.cart_count())}</span>
                            <span class="cart__subtotal">{move || format_price(ctx.subtotal())}</span>
                        </div>
                        <Button appearance=ButtonAppearance::Primary class="cart__checkout" on_click=checkout>
                            "Proceed to checkout"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle class="cart__clear" on_click=clear>
                            "Clear cart"
                        </Button>
                    </aside>
                </div>
            </Show>
        </PageFrame>
    }
}

#[component]
fn CartLine(item: CartItem) -> impl IntoView {
    let ctx = use_global();
    let toasts = use_toasts();
    let config = use_config();
    let key = item.key();
    let name = item.name.clone();

    let line_total = move || {
        let total = ctx
            .cart
            .with(|c| c.get(key).map(CartItem::line_total))
            .unwrap_or_default();
        config.with_value(|c| total.format_with(&c.currency_symbol))
    };
    let unit_price = config.with_value(|c| item.price.format_with(&c.currency_symbol));

    let remove = move |_: MouseEvent| {
        ctx.remove_from_cart(key);
        toasts.info(format!("{} removed from cart", name));
    };

    // Lines are snapshots; the controls need the live catalog entry
    let controls = match find(key) {
        Some(product) => {
            let on_change = move |ev: web_sys::Event| {
                let raw = event_target_value(&ev);
                match parse_quantity(&raw) {
                    Some(quantity) => {
                        if ctx.set_quantity(product, quantity) == 0 {
                            toasts.info(format!("{} removed from cart", product.name));
                        }
                    }
                    None => toasts.warning(format!("\"{}\" is not a quantity", raw.trim())),
                }
            };
            view! {
                <QuantityControls product=product />
                <input
                    class="cart-line__quantity"
                    type="number"
                    min="0"
                    max=MAX_LINE_QUANTITY.to_string()
                    aria-label="Quantity"
                    prop:value=move || ctx.quantity_of(key).to_string()
                    on:change=on_change
                />
            }
            .into_any()
        }
        None => view! {
            <span class="quantity-controls__value">{move || ctx.quantity_of(key)}</span>
        }
        .into_any(),
    };

    view! {
        <li class="cart-line">
            <img class="cart-line__image" src=item.image.clone() alt=item.name.clone() />
            <div class="cart-line__info">
                <h3 class="cart-line__name">{item.name.clone()}</h3>
                <span class="cart-line__unit">{unit_price}</span>
            </div>
            <div class="cart-line__controls">{controls}</div>
            <span class="cart-line__total">{line_total}</span>
            <button class="cart-line__remove" title="Remove" on:click=remove>
                {icon("trash")}
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Some(3));
        assert_eq!(parse_quantity(" 12 "), Some(12));
        assert_eq!(parse_quantity("0"), Some(0));
        assert_eq!(parse_quantity("250"), Some(MAX_LINE_QUANTITY));
        assert_eq!(parse_quantity("99999999999999"), Some(MAX_LINE_QUANTITY));

        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("2.5"), None);
        assert_eq!(parse_quantity("two"), None);
    }
}
