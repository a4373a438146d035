use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance};

use crate::domain::a003_favorite::context::use_favorites;
use crate::layout::global_context::use_global;
use crate::shared::navigation::use_navigator;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_ACCOUNT;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use contracts::system::auth::UserProfile;

/// `/profile`, mounted behind `RequireUser`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let favorites = use_favorites();
    let ctx = use_global();
    let toasts = use_toasts();
    let navigator = use_navigator();

    let field = move |read: fn(&UserProfile) -> String| {
        move || session.user.with(|u| u.as_ref().map(read).unwrap_or_default())
    };

    let sign_out = move |_: MouseEvent| {
        session.sign_out();
        toasts.info("Signed out");
        navigator.go("/");
    };

    view! {
        <PageFrame page_id="profile--account" category=PAGE_CAT_ACCOUNT>
            <div class="profile">
                <div class="profile__avatar">
                    {field(|u| u.initial().to_string())}
                </div>
                <h1 class="page__title">{field(|u| u.name.clone())}</h1>
                <p class="profile__email">{field(|u| u.email.clone())}</p>

                <div class="profile__stats">
                    <A href="/favorites" attr:class="profile__stat">
                        <strong>{move || favorites.count()}</strong>
                        <span>"Favorites"</span>
                    </A>
                    <A href="/cart" attr:class="profile__stat">
                        <strong>{move || ctx.cart_count()}</strong>
                        <span>"In cart"</span>
                    </A>
                </div>

                <Button appearance=ButtonAppearance::Secondary on_click=sign_out>
                    "Sign out"
                </Button>
            </div>
        </PageFrame>
    }
}
