use crate::domain::a001_product::ui::catalog::state::catalog_path;
use crate::shared::config::use_config;
use contracts::domain::a001_product::Category;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let brand = use_config().with_value(|c| c.brand_name.clone());
    let year = crate::shared::date_utils::current_year();

    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__columns">
                <div class="footer__column">
                    <h3>{brand.clone()}</h3>
                    <p>"Coffee, cakes, soups and milkshakes made with care."</p>
                </div>
                <div class="footer__column">
                    <h3>"Menu"</h3>
                    {Category::all()
                        .into_iter()
                        .map(|category| view! {
                            <A href=catalog_path(category)>{category.label()}</A>
                        })
                        .collect_view()}
                </div>
                <div class="footer__column">
                    <h3>"Help"</h3>
                    <A href="/faq">"FAQ"</A>
                    <A href="/contact">"Contact"</A>
                    <A href="/about">"About us"</A>
                </div>
            </div>
            <p class="footer__copyright">{format!("© {} {}", year, brand)}</p>
        </footer>
    }
}
