pub mod footer;
pub mod global_context;
pub mod navbar;
pub mod scroll_to_top;

use crate::shared::toast::ToastHost;
use footer::Footer;
use leptos::prelude::*;
use navbar::Navbar;
use scroll_to_top::ScrollToTop;

/// Page chrome around the routed content.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar (brand, links, counters, user)   |
/// +------------------------------------------+
/// |             routed page                  |
/// +------------------------------------------+
/// |                Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <ScrollToTop />
            <Navbar />
            <main class="app-main">
                {children()}
            </main>
            <Footer />
            <ToastHost />
        </div>
    }
}
