use crate::layout::global_context::use_global;
use crate::shared::components::ui::{field_error, Input};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_placed_at, now_utc};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_BASKET;
use crate::shared::toast::use_toasts;
use crate::system::auth::context::use_session;
use contracts::domain::a002_cart::CartItem;
use contracts::domain::a004_order::{CheckoutForm, FieldError, Order, OrderId};
use contracts::domain::common::Price;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Button, ButtonAppearance, ButtonType};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let placed = RwSignal::new(None::<Order>);

    view! {
        <PageFrame page_id="a004_order--basket" category=PAGE_CAT_BASKET>
            {move || match placed.get() {
                Some(order) => view! { <OrderConfirmation order=order /> }.into_any(),
                None => view! { <CheckoutDetails placed=placed /> }.into_any(),
            }}
        </PageFrame>
    }
}

#[component]
fn CheckoutDetails(placed: RwSignal<Option<Order>>) -> impl IntoView {
    let ctx = use_global();
    let toasts = use_toasts();
    let config = use_config();
    let session = use_session();

    // Signed-in customers start with their name and email filled in
    let profile = session.user.get_untracked();
    let full_name = RwSignal::new(profile.as_ref().map(|p| p.name.clone()).unwrap_or_default());
    let email = RwSignal::new(profile.map(|p| p.email).unwrap_or_default());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let note = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let format_price =
        move |price: Price| config.with_value(|c| price.format_with(&c.currency_symbol));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let form = CheckoutForm {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            note: note.get_untracked(),
        };
        if let Err(field_errors) = form.validate() {
            errors.set(field_errors);
            return;
        }
        errors.set(Vec::new());

        let result = ctx
            .cart
            .with_untracked(|cart| Order::place(cart, form, now_utc(), OrderId::new_v4()));
        match result {
            Ok(order) => {
                log::info!(
                    "order {} placed: {} items, {}",
                    order.reference(),
                    order.total_quantity,
                    order.total
                );
                ctx.clear_cart();
                toasts.success("Order placed");
                placed.set(Some(order));
            }
            Err(e) => {
                log::warn!("checkout rejected: {:#}", e);
                toasts.warning(format!("{:#}", e));
            }
        }
    };

    let text = |signal: RwSignal<String>| Callback::new(move |value: String| signal.set(value));

    view! {
        <header class="page__header">
            <A href="/cart" attr:class="page__back">{icon("arrow-left")} "Back to cart"</A>
            <h1 class="page__title">"Checkout"</h1>
        </header>
        <Show
            when=move || ctx.cart.with(|c| !c.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    {icon("cart")}
                    <p>"There is nothing to check out yet."</p>
                    <A href="/shop" attr:class="empty-state__link">"Browse the menu"</A>
                </div>
            }
        >
            <div class="checkout">
                <form class="checkout__form form" novalidate=true on:submit=on_submit>
                    <Input label="Full name" id="checkout-name" autocomplete="name"
                        value=full_name on_input=text(full_name) error=field_error(errors, "full_name") />
                    <Input label="Email" id="checkout-email" input_type="email" autocomplete="email"
                        value=email on_input=text(email) error=field_error(errors, "email") />
                    <Input label="Phone" id="checkout-phone" input_type="tel" autocomplete="tel"
                        value=phone on_input=text(phone) error=field_error(errors, "phone") />
                    <Input label="Delivery address" id="checkout-address" autocomplete="street-address"
                        value=address on_input=text(address) error=field_error(errors, "address") />
                    <div class="form__group">
                        <label class="form__label" for="checkout-note">"Note for the barista"</label>
                        <textarea
                            id="checkout-note"
                            class="form__input form__textarea"
                            rows="3"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        />
                    </div>
                    <Button appearance=ButtonAppearance::Primary button_type=ButtonType::Submit>
                        "Place order"
                    </Button>
                </form>

                <aside class="checkout__summary">
                    <h2>"Order summary"</h2>
                    <ul class="checkout__lines">
                        {move || ctx.cart.with(|cart| {
                            cart.items()
                                .map(|item| summary_line(item, &format_price))
                                .collect_view()
                        })}
                    </ul>
                    <div class="checkout__total">
                        <span>"Total"</span>
                        <span>{move || format_price(ctx.subtotal())}</span>
                    </div>
                </aside>
            </div>
        </Show>
    }
}

fn summary_line(
    item: &CartItem,
    format_price: &impl Fn(Price) -> String,
) -> impl IntoView {
    view! {
        <li class="checkout__line">
            <span>{format!("{} × {}", item.quantity, item.name)}</span>
            <span>{format_price(item.line_total())}</span>
        </li>
    }
}

#[component]
fn OrderConfirmation(order: Order) -> impl IntoView {
    let config = use_config();
    let total = config.with_value(|c| order.total.format_with(&c.currency_symbol));
    let brand = config.with_value(|c| c.brand_name.clone());

    view! {
        <div class="order-confirmation">
            <div class="order-confirmation__icon">{icon("check")}</div>
            <h1 class="page__title">{format!("Thank you, {}!", order.customer.full_name.trim())}</h1>
            <p>{format!("{} is preparing your order.", brand)}</p>
            <dl class="order-confirmation__details">
                <dt>"Reference"</dt>
                <dd>{order.reference()}</dd>
                <dt>"Placed"</dt>
                <dd>{format_placed_at(&order.placed_at)}</dd>
                <dt>"Items"</dt>
                <dd>{order.total_quantity}</dd>
                <dt>"Total"</dt>
                <dd>{total}</dd>
            </dl>
            <p class="order-confirmation__email">
                {format!("A receipt will be sent to {}.", order.customer.email.trim())}
            </p>
            <A href="/shop" attr:class="empty-state__link">"Continue shopping"</A>
        </div>
    }
}
