use crate::domain::a003_favorite::context::use_favorites;
use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

/// Heart in the corner of a product image; red and filled while liked.
#[component]
pub fn HeartToggle(product: &'static Product) -> impl IntoView {
    let favorites = use_favorites();
    let toasts = use_toasts();
    let key = product.key();
    let liked = move || favorites.is_liked(key);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if favorites.toggle(product) {
            toasts.info(format!("{} added to favorites", product.name));
        } else {
            toasts.info(format!("{} removed from favorites", product.name));
        }
    };

    view! {
        <button
            class="heart-toggle"
            class:heart-toggle--liked=liked
            aria-pressed=move || if liked() { "true" } else { "false" }
            title=move || if liked() { "Remove from favorites" } else { "Add to favorites" }
            on:click=on_click
        >
            {move || if liked() { icon("heart-filled") } else { icon("heart") }}
        </button>
    }
}
