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
use contracts::system::auth::RegisterRequest;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigator = use_navigator();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = RegisterRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(field_errors) = request.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(Vec::new());

        let profile = request.into_profile();
        let greeting = format!("Welcome, {}!", profile.name);
        match session.sign_in(profile) {
            Ok(()) => {
                toasts.success(greeting);
                navigator.go("/profile");
            }
            Err(e) => {
                log::warn!("Registration not saved: {}", e);
                toasts.warning("Could not save your account in this browser");
            }
        }
    };

    let text = |signal: RwSignal<String>| Callback::new(move |v: String| signal.set(v));

    view! {
        <PageFrame page_id="register--account" category=PAGE_CAT_ACCOUNT class="auth-page">
            <div class="auth-box">
                <h1 class="page__title">"Create an account"</h1>
                <form class="form" novalidate=true on:submit=on_submit>
                    <Input label="Name" id="register-name" autocomplete="name"
                        value=name on_input=text(name) error=field_error(errors, "name") />
                    <Input label="Email" id="register-email" input_type="email" autocomplete="email"
                        value=email on_input=text(email) error=field_error(errors, "email") />
                    <Input label="Password" id="register-password" input_type="password"
                        autocomplete="new-password"
                        value=password on_input=text(password) error=field_error(errors, "password") />
                    <Input label="Confirm password" id="register-confirm" input_type="password"
                        autocomplete="new-password"
                        value=confirm_password on_input=text(confirm_password)
                        error=field_error(errors, "confirm_password") />
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        "Register"
                    </Button>
                </form>
                <p class="auth-box__switch">
                    "Already have an account? " <A href="/login">"Sign in"</A>
                </p>
            </div>
        </PageFrame>
    }
}
