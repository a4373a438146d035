//! Shop-wide settings.
//!
//! Every field has a default, so a partial JSON document only overrides
//! the keys it names.

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub brand_name: String,
    pub currency_symbol: String,
    /// How long a toast stays on screen
    pub toast_auto_close_ms: u32,
    /// localStorage key of the favorites array
    pub favorites_storage_key: String,
    /// localStorage key of the signed-in user
    pub user_storage_key: String,
    /// Name of the window event fired after favorites change
    pub favorites_event: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            brand_name: "Brew Haven".to_string(),
            currency_symbol: "$".to_string(),
            toast_auto_close_ms: 3000,
            favorites_storage_key: "favorites".to_string(),
            user_storage_key: "user".to_string(),
            favorites_event: "favoritesUpdated".to_string(),
        }
    }
}

impl ShopConfig {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid shop config document")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.favorites_storage_key, "favorites");
        assert_eq!(config.favorites_event, "favoritesUpdated");
        assert_eq!(config.toast_auto_close_ms, 3000);
    }

    #[test]
    fn test_partial_override() {
        let config =
            ShopConfig::from_json(r#"{ "brand_name": "Corner Café", "toast_auto_close_ms": 5000 }"#)
                .unwrap();
        assert_eq!(config.brand_name, "Corner Café");
        assert_eq!(config.toast_auto_close_ms, 5000);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.user_storage_key, "user");
    }

    #[test]
    fn test_invalid_document() {
        assert!(ShopConfig::from_json("[1, 2]").is_err());
        assert!(ShopConfig::from_json(r#"{ "toast_auto_close_ms": "soon" }"#).is_err());
    }
}
