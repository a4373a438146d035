use super::global_context::use_global;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Jumps back to the top of the window on every route change and folds
/// the mobile menu.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let location = use_location();
    let ctx = use_global();

    Effect::new(move |_| {
        let path = location.pathname.get();
        log::debug!("route -> {}", path);
        ctx.close_mobile_menu();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}
