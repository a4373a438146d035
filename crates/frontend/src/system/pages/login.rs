use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance, ButtonType};

use crate::shared::components::ui::{field_error, Input};
use crate::shared::navigation::use_navigator;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_ACCOUNT;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use contracts::domain::a004_order::FieldError;
use contracts::system::auth::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigator = use_navigator();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let error_message = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        error_message.set(None);

        let request = LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(field_errors) = request.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(Vec::new());

        let profile = request.into_profile_with(session.known_profile().as_ref());
        let greeting = format!("Welcome back, {}!", profile.name);
        match session.sign_in(profile) {
            Ok(()) => {
                toasts.success(greeting);
                navigator.go("/profile");
            }
            Err(e) => {
                log::warn!("Login failed: {}", e);
                error_message.set(Some(format!("Login failed: {}", e)));
            }
        }
    };

    view! {
        <PageFrame page_id="login--account" category=PAGE_CAT_ACCOUNT class="auth-page">
            <div class="auth-box">
                <h1 class="page__title">"Sign in"</h1>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form class="form" novalidate=true on:submit=on_submit>
                    <Input label="Email" id="login-email" input_type="email" autocomplete="email"
                        value=email
                        on_input=Callback::new(move |v: String| email.set(v))
                        error=field_error(errors, "email") />
                    <Input label="Password" id="login-password" input_type="password"
                        autocomplete="current-password"
                        value=password
                        on_input=Callback::new(move |v: String| password.set(v))
                        error=field_error(errors, "password") />
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        "Sign in"
                    </Button>
                </form>

                <p class="auth-box__switch">
                    "New here? " <A href="/register">"Create an account"</A>
                </p>
            </div>
        </PageFrame>
    }
}
