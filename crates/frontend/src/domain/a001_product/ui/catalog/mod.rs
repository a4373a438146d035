pub mod state;

use self::state::{catalog_href, catalog_path, CatalogQuery};
use crate::domain::a001_product::ui::product_card::ProductCard;
use crate::pages::not_found::NotFound;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::navigation::{use_navigator, Navigator};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CATALOG;
use contracts::domain::a001_product::catalog::search;
use contracts::domain::a001_product::Category;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_params_map};

/// `/shop/:category`. An unknown slug renders the not-found page.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let navigator = use_navigator();

    let category = Memo::new(move |_| {
        params
            .read()
            .get("category")
            .and_then(|slug| Category::from_slug(&slug))
    });
    let query = Memo::new(move |_| CatalogQuery::from_search(&location.search.get()));

    move || match category.get() {
        Some(category) => view! {
            <CatalogView category=category query=query navigator=navigator />
        }
        .into_any(),
        None => {
            log::debug!("unknown category slug: {:?}", params.read_untracked().get("category"));
            view! { <NotFound /> }.into_any()
        }
    }
}

#[component]
fn CatalogView(category: Category, query: Memo<CatalogQuery>, navigator: Navigator) -> impl IntoView {
    let products = Memo::new(move |_| search(category, &query.get().q));

    // The box keeps exactly what was typed; the URL only gets the trimmed query
    let text = RwSignal::new(query.get_untracked().q);
    Effect::new(move |_| {
        let current = query.get();
        if !current.describes(&text.get_untracked()) {
            text.set(current.q);
        }
    });

    let on_search = Callback::new(move |raw: String| {
        let next = CatalogQuery::from_input(&raw);
        text.set(raw);
        if query.with_untracked(|current| current != &next) {
            navigator.replace(&catalog_href(category, &next));
        }
    });

    view! {
        <PageFrame page_id="a001_product--catalog" category=PAGE_CAT_CATALOG>
            <header class="page__header">
                <h1 class="page__title">{category.title()}</h1>
                <p class="page__subtitle">{category.tagline()}</p>
            </header>

            <nav class="catalog__tabs">
                {Category::all()
                    .into_iter()
                    .map(|other| {
                        view! {
                            <A
                                href=catalog_path(other)
                                attr:class=if other == category { "catalog__tab catalog__tab--active" } else { "catalog__tab" }
                            >
                                {other.label()}
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="catalog__search">
                <span class="catalog__search-icon">{icon("search")}</span>
                <Input
                    id="catalog-search"
                    input_type="search"
                    placeholder=format!("Search {}...", category.label().to_lowercase())
                    value=text
                    on_input=on_search
                />
            </div>

            <Show
                when=move || products.with(|p| !p.is_empty())
                fallback=move || view! {
                    <p class="catalog__empty">
                        {move || format!("Nothing on the menu matches \"{}\".", query.get().q.trim())}
                    </p>
                }
            >
                <div class="product-grid">
                    <For
                        each=move || products.get().into_iter().enumerate()
                        key=|(_, product)| product.key()
                        children=|(index, product)| {
                            view! { <ProductCard product=product delay_ms=stagger_delay(index) /> }
                        }
                    />
                </div>
            </Show>
        </PageFrame>
    }
}
