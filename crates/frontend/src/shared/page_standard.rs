//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_product--catalog"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity name searchable: copy the id from the
//! DOM inspector, search for it, and you land in `domain/a001_product/`.

/// Product grid for one category, or the category index.
pub const PAGE_CAT_CATALOG: &str = "catalog";

/// Cart, favorites and checkout pages.
pub const PAGE_CAT_BASKET: &str = "basket";

/// Login, registration and profile.
pub const PAGE_CAT_ACCOUNT: &str = "account";

/// Static content (home, about, FAQ, contact, not found).
pub const PAGE_CAT_CONTENT: &str = "content";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_CATALOG,
    PAGE_CAT_BASKET,
    PAGE_CAT_ACCOUNT,
    PAGE_CAT_CONTENT,
];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_product--catalog"));
        assert!(is_valid_page_id("home--content"));
        assert!(!is_valid_page_id("a002_cart"));
        assert!(!is_valid_page_id("--basket"));
        assert!(!is_valid_page_id("a002_cart--list"));
    }
}
