use crate::domain::a003_favorite::context::provide_favorites;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::provide_config;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = provide_config();

    // Session cart and menu state
    provide_context(AppGlobalContext::new());

    let shop = config.get_value();
    provide_favorites(&shop);
    provide_context(ToastService::new(shop.toast_auto_close_ms));

    view! {
        <ConfigProvider>
            <SessionProvider>
                <AppRoutes />
            </SessionProvider>
        </ConfigProvider>
    }
}
