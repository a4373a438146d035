use crate::domain::a002_cart::ui::quantity_controls::QuantityControls;
use crate::domain::a003_favorite::ui::heart_toggle::HeartToggle;
use crate::layout::global_context::use_global;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::config::use_config;
use crate::shared::navigation::use_navigator;
use contracts::domain::a001_product::Product;
use contracts::domain::common::AggregateId;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn ProductCard(product: &'static Product, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let ctx = use_global();
    let config = use_config();
    let navigator = use_navigator();

    let price = config.with_value(|c| product.price.format_with(&c.currency_symbol));

    let buy_now = move |_: MouseEvent| {
        ctx.add_to_cart(product);
        navigator.go("/cart");
    };

    view! {
        <CardAnimated delay_ms=delay_ms class="product-card">
            <div class="product-card__media" id=product.key().as_string()>
                <img class="product-card__image" src=product.image.clone() alt=product.name.clone() loading="lazy" />
                <HeartToggle product=product />
            </div>
            <div class="product-card__info">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <p class="product-card__price">{price}</p>
                <div class="product-card__actions">
                    <QuantityControls product=product />
                    <Button appearance=ButtonAppearance::Secondary class="buy-now" on_click=buy_now>
                        "Buy Now"
                    </Button>
                </div>
            </div>
        </CardAnimated>
    }
}
