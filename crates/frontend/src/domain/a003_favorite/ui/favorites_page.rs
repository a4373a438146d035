use crate::domain::a002_cart::ui::quantity_controls::QuantityControls;
use crate::domain::a003_favorite::context::use_favorites;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BASKET;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_product::catalog::find;
use contracts::domain::a001_product::Product;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let favorites = use_favorites();

    let products = Memo::new(move |_| {
        favorites
            .favorites
            .with(|list| list.liked_keys())
            .into_iter()
            .filter_map(find)
            .collect::<Vec<&'static Product>>()
    });

    view! {
        <PageFrame page_id="a003_favorite--basket" category=PAGE_CAT_BASKET>
            <header class="page__header">
                <h1 class="page__title">"Your Favorites"</h1>
            </header>
            <Show
                when=move || products.with(|p| !p.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        {icon("heart")}
                        <p>"No favorites yet. Tap the heart on anything you like."</p>
                        <A href="/shop" attr:class="empty-state__link">"Browse the menu"</A>
                    </div>
                }
            >
                <div class="favorites-grid">
                    <For
                        each=move || products.get().into_iter().enumerate()
                        key=|(_, product)| product.key()
                        children=|(index, product)| view! {
                            <FavoriteCard product=product delay_ms=stagger_delay(index) />
                        }
                    />
                </div>
            </Show>
        </PageFrame>
    }
}

#[component]
fn FavoriteCard(product: &'static Product, delay_ms: u32) -> impl IntoView {
    let favorites = use_favorites();
    let toasts = use_toasts();
    let config = use_config();
    let price = config.with_value(|c| product.price.format_with(&c.currency_symbol));

    let remove = move |_: MouseEvent| {
        favorites.remove(product.key());
        toasts.info(format!("{} removed from favorites", product.name));
    };

    view! {
        <CardAnimated delay_ms=delay_ms class="favorite-card">
            <img class="favorite-card__image" src=product.image.clone() alt=product.name.clone() />
            <div class="favorite-card__info">
                <h3 class="favorite-card__name">{product.name.clone()}</h3>
                <span class="favorite-card__category">{product.category.label()}</span>
                <p class="favorite-card__price">{price}</p>
            </div>
            <div class="favorite-card__actions">
                <QuantityControls product=product />
                <Button appearance=ButtonAppearance::Subtle on_click=remove>
                    "Remove"
                </Button>
            </div>
        </CardAnimated>
    }
}
