use crate::shared::components::ui::{field_error, Input};
use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONTENT;
use crate::shared::toast::use_toasts;
use contracts::domain::a004_order::{is_valid_email, FieldError};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonType};

const MIN_MESSAGE_LEN: usize = 10;

fn validate_message(name: &str, email: &str, message: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            message: "Please enter your name",
        });
    }
    if !is_valid_email(email) {
        errors.push(FieldError {
            field: "email",
            message: "Please enter a valid email address",
        });
    }
    if message.trim().chars().count() < MIN_MESSAGE_LEN {
        errors.push(FieldError {
            field: "message",
            message: "Tell us a little more (at least 10 characters)",
        });
    }
    errors
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = use_toasts();
    let brand = use_config().with_value(|c| c.brand_name.clone());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let message_error = field_error(errors, "message");

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let found = validate_message(
            &name.get_untracked(),
            &email.get_untracked(),
            &message.get_untracked(),
        );
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        // Nothing is sent anywhere
        log::info!("contact message from {}", email.get_untracked());
        errors.set(Vec::new());
        name.set(String::new());
        email.set(String::new());
        message.set(String::new());
        toasts.success("Thanks! We'll get back to you soon.");
    };

    view! {
        <PageFrame page_id="contact--content" category=PAGE_CAT_CONTENT>
            <header class="page__header">
                <h1 class="page__title">"Contact us"</h1>
                <p class="page__subtitle">{format!("Questions, feedback or catering for {}? Drop us a line.", brand)}</p>
            </header>
            <div class="contact">
                <address class="contact__details">
                    <p>"12 Roast Lane, Springfield"</p>
                    <p>"Open daily 7:00 to 19:00"</p>
                    <p>"hello@brewhaven.cafe"</p>
                </address>
                <form class="form contact__form" novalidate=true on:submit=on_submit>
                    <Input label="Name" id="contact-name" autocomplete="name"
                        value=name
                        on_input=Callback::new(move |v: String| name.set(v))
                        error=field_error(errors, "name") />
                    <Input label="Email" id="contact-email" input_type="email" autocomplete="email"
                        value=email
                        on_input=Callback::new(move |v: String| email.set(v))
                        error=field_error(errors, "email") />
                    <div class="form__group" class:form__group--invalid=move || message_error.with(Option::is_some)>
                        <label class="form__label" for="contact-message">"Message"</label>
                        <textarea
                            id="contact-message"
                            class="form__input form__textarea"
                            rows="5"
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        />
                        {move || message_error.get().map(|m| view! {
                            <span class="form__error">{m}</span>
                        })}
                    </div>
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        "Send message"
                    </Button>
                </form>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_message() {
        assert!(validate_message("Ada", "ada@example.com", "Do you cater weddings?").is_empty());

        let fields: Vec<_> = validate_message(" ", "ada", "hi")
            .iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name", "email", "message"]);
    }
}
