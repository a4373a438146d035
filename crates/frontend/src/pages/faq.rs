use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONTENT;
use leptos::prelude::*;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "Do you offer dairy-free milk?",
        "Yes. Oat, almond and soy milk are available for every coffee and milkshake.",
    ),
    (
        "Is my cart saved if I close the tab?",
        "No. The cart lasts for your visit. Favorites are kept in your browser until you remove them.",
    ),
    (
        "Can I order ahead for pickup?",
        "Place your order at checkout and leave a note for the barista with your pickup time.",
    ),
    (
        "Do I need an account to order?",
        "No. Signing in only fills in your name and email at checkout.",
    ),
];

#[component]
pub fn FaqPage() -> impl IntoView {
    view! {
        <PageFrame page_id="faq--content" category=PAGE_CAT_CONTENT>
            <header class="page__header">
                <h1 class="page__title">"Frequently asked questions"</h1>
            </header>
            <div class="faq">
                {QUESTIONS
                    .iter()
                    .map(|(question, answer)| view! {
                        <details class="faq__item">
                            <summary class="faq__question">{*question}</summary>
                            <p class="faq__answer">{*answer}</p>
                        </details>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
