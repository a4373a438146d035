use crate::shared::config::use_config;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONTENT;
use leptos::prelude::*;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("Premium beans", "Single-origin beans, roasted in small batches every week."),
    ("Expert baristas", "Every cup is pulled by a trained barista, never a machine on autopilot."),
    ("Cozy ambiance", "Soft light, deep chairs and room to stay as long as you like."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    let brand = use_config().with_value(|c| c.brand_name.clone());

    view! {
        <PageFrame page_id="about--content" category=PAGE_CAT_CONTENT>
            <header class="page__header">
                <h1 class="page__title">{format!("About {}", brand)}</h1>
                <p class="page__subtitle">
                    "A neighbourhood café serving coffee, cakes, soups and milkshakes since 2015."
                </p>
            </header>
            <div class="highlights">
                {HIGHLIGHTS
                    .iter()
                    .map(|(title, text)| view! {
                        <article class="highlight">
                            <h2 class="highlight__title">{*title}</h2>
                            <p>{*text}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </PageFrame>
    }
}
