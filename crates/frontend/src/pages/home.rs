use crate::domain::a001_product::ui::product_card::ProductCard;
use crate::domain::a001_product::ui::shop_index::CategoryCard;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONTENT;
use contracts::domain::a001_product::catalog::featured;
use contracts::domain::a001_product::Category;
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURED_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let brand = use_config().with_value(|c| c.brand_name.clone());

    view! {
        <PageFrame page_id="home--content" category=PAGE_CAT_CONTENT class="home">
            <section class="hero">
                <h1 class="hero__title">{format!("Welcome to {}", brand)}</h1>
                <p class="hero__subtitle">
                    "Freshly roasted coffee, homemade cakes and soups, and thick milkshakes."
                </p>
                <A href="/shop" attr:class="hero__cta">"Order now"</A>
            </section>

            <section class="home__categories">
                <h2 class="section__title">"Explore the menu"</h2>
                <div class="category-grid">
                    {Category::all()
                        .into_iter()
                        .enumerate()
                        .map(|(index, category)| view! {
                            <CategoryCard category=category delay_ms=stagger_delay(index) />
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="home__featured">
                <h2 class="section__title">"Barista favorites"</h2>
                <div class="product-grid">
                    {featured(Category::Coffee, FEATURED_COUNT)
                        .iter()
                        .enumerate()
                        .map(|(index, product)| view! {
                            <ProductCard product=product delay_ms=stagger_delay(index) />
                        })
                        .collect_view()}
                </div>
            </section>
        </PageFrame>
    }
}
