//! PageFrame: standard root wrapper for every routed page.
//!
//! Guarantees two metadata attributes on the root DOM element:
//!   - `id`                  `"{entity}--{category}"`, e.g. `"a002_cart--basket"`
//!   - `data-page-category`  one of the PAGE_CAT_* constants
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a002_cart--basket" category=PAGE_CAT_BASKET>
//!         <h1 class="page__title">"Your Cart"</h1>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`
    category: &'static str,
    /// Additional CSS classes appended after the base class
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {}", page_id);

    let base_class = match category {
        PAGE_CAT_CATALOG => "page page--catalog",
        PAGE_CAT_BASKET => "page page--basket",
        PAGE_CAT_ACCOUNT => "page page--account",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <section id=page_id class=full_class data-page-category=category>
            {children()}
        </section>
    }
}
