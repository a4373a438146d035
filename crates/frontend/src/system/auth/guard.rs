use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;

/// Renders `children` for a signed-in customer, otherwise redirects to
/// `/login`.
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_signed_in()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            {children()}
        </Show>
    }
}
