use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONTENT;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--content" category=PAGE_CAT_CONTENT class="not-found">
            <h1 class="page__title">"Page not found"</h1>
            <p>"We couldn't find what you were looking for."</p>
            <A href="/" attr:class="empty-state__link">"Back to home"</A>
        </PageFrame>
    }
}
