use crate::domain::a003_favorite::context::use_favorites;
use crate::layout::global_context::use_global;
use crate::shared::components::ui::CountBadge;
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;
use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/shop", "Shop"),
    ("/about", "About"),
    ("/faq", "FAQ"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global();
    let favorites = use_favorites();
    let session = use_session();
    let brand = use_config().with_value(|c| c.brand_name.clone());

    let favorites_count = Signal::derive(move || favorites.count());
    let cart_count = Signal::derive(move || ctx.cart_count() as usize);

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">
                {icon("coffee")}
                <span>{brand}</span>
            </A>

            <button
                class="navbar__toggle"
                aria-label="Toggle menu"
                aria-expanded=move || if ctx.mobile_menu_open.get() { "true" } else { "false" }
                on:click=move |_| ctx.toggle_mobile_menu()
            >
                "☰"
            </button>

            <nav class="navbar__links" class:navbar__links--open=move || ctx.mobile_menu_open.get()>
                {LINKS
                    .iter()
                    .map(|(href, label)| view! {
                        <A href=*href attr:class="navbar__link">{*label}</A>
                    })
                    .collect_view()}
            </nav>

            <div class="navbar__actions">
                <A href="/favorites" attr:class="navbar__icon" attr:title="Favorites">
                    {icon("heart")}
                    <CountBadge count=favorites_count />
                </A>
                <A href="/cart" attr:class="navbar__icon" attr:title="Cart">
                    {icon("cart")}
                    <CountBadge count=cart_count />
                </A>
                {move || match session.user.get() {
                    Some(profile) => {
                        let title = profile.name.clone();
                        let initial = profile.initial().to_string();
                        view! {
                            <A href="/profile" attr:class="navbar__avatar" attr:title=title>
                                {initial}
                            </A>
                        }
                        .into_any()
                    }
                    None => view! {
                        <A href="/login" attr:class="navbar__icon" attr:title="Sign in">
                            {icon("user")}
                        </A>
                    }
                    .into_any(),
                }}
            </div>
        </header>
    }
}
