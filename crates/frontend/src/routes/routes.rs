use crate::domain::a001_product::ui::catalog::CatalogPage;
use crate::domain::a001_product::ui::shop_index::ShopIndexPage;
use crate::domain::a002_cart::ui::cart_page::CartPage;
use crate::domain::a003_favorite::ui::favorites_page::FavoritesPage;
use crate::domain::a004_order::ui::checkout_page::CheckoutPage;
use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::faq::FaqPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::system::auth::guard::RequireUser;
use crate::system::pages::login::LoginPage;
use crate::system::pages::profile::ProfilePage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn GuardedProfile() -> impl IntoView {
    view! {
        <RequireUser>
            <ProfilePage />
        </RequireUser>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/home") view=HomePage />
                    <Route path=path!("/shop") view=ShopIndexPage />
                    <Route path=path!("/shop/:category") view=CatalogPage />
                    <Route path=path!("/cart") view=CartPage />
                    <Route path=path!("/checkout") view=CheckoutPage />
                    <Route path=path!("/favorites") view=FavoritesPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/profile") view=GuardedProfile />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/faq") view=FaqPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </Shell>
        </Router>
    }
}
