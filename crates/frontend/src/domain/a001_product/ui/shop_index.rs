use super::catalog::state::catalog_path;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CATALOG;
use contracts::domain::a001_product::catalog::catalog;
use contracts::domain::a001_product::Category;
use leptos::prelude::*;
use leptos_router::components::A;

/// `/shop`: one card per category.
#[component]
pub fn ShopIndexPage() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_product--catalog" category=PAGE_CAT_CATALOG class="shop-index">
            <header class="page__header">
                <h1 class="page__title">"Our Menu"</h1>
                <p class="page__subtitle">"Pick a category to start your order."</p>
            </header>
            <div class="category-grid">
                {Category::all()
                    .into_iter()
                    .enumerate()
                    .map(|(index, category)| view! {
                        <CategoryCard category=category delay_ms=stagger_delay(index) />
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}

/// Card linking to `/shop/{slug}`, also used on the home page.
#[component]
pub fn CategoryCard(category: Category, #[prop(optional)] delay_ms: u32) -> impl IntoView {
    let products = catalog(category);
    let cover = products.first().map(|p| p.image.clone()).unwrap_or_default();

    view! {
        <CardAnimated delay_ms=delay_ms class="category-card">
            <A href=catalog_path(category)>
                <img class="category-card__image" src=cover alt=category.label() loading="lazy" />
                <div class="category-card__body">
                    <h2 class="category-card__title">{category.label()}</h2>
                    <p class="category-card__tagline">{category.tagline()}</p>
                    <span class="category-card__count">{format!("{} items", products.len())}</span>
                </div>
            </A>
        </CardAnimated>
    }
}
