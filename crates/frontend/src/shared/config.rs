//! Loads [`ShopConfig`] from the page and provides it as context.
//!
//! `index.html` may carry an override document:
//! ```html
//! <script id="shop-config" type="application/json">{ "brand_name": "Corner Café" }</script>
//! ```

use contracts::shared::config::ShopConfig;
use leptos::prelude::*;
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "shop-config";

fn read_config_document() -> Option<String> {
    let document = window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|s| !s.trim().is_empty())
}

/// Page config merged over the defaults. Malformed documents are logged
/// and ignored.
pub fn load_config() -> ShopConfig {
    match read_config_document() {
        Some(raw) => match ShopConfig::from_json(&raw) {
            Ok(config) => {
                log::info!("Loaded shop config for '{}'", config.brand_name);
                config
            }
            Err(e) => {
                log::warn!("Ignoring shop config: {:#}", e);
                ShopConfig::default()
            }
        },
        None => ShopConfig::default(),
    }
}

pub fn provide_config() -> StoredValue<ShopConfig> {
    let config = StoredValue::new(load_config());
    provide_context(config);
    config
}

pub fn use_config() -> StoredValue<ShopConfig> {
    use_context::<StoredValue<ShopConfig>>().expect("ShopConfig not provided")
}
