use contracts::domain::a001_product::Category;
use serde::{Deserialize, Serialize};

/// Query-string state of a catalog page (`/shop/coffee?q=latte`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub q: String,
}

impl CatalogQuery {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }

    /// Query for what is typed in the search box. Surrounding whitespace
    /// never reaches the URL.
    pub fn from_input(text: &str) -> Self {
        Self::new(text.trim())
    }

    /// Whether the search box text already stands for this query
    pub fn describes(&self, text: &str) -> bool {
        self.q == text.trim()
    }

    /// Parse `location.search`; unknown keys are ignored and garbage
    /// yields the empty query.
    pub fn from_search(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    /// `?q=...`, or an empty string when there is nothing to encode
    pub fn to_search(&self) -> String {
        if self.q.trim().is_empty() {
            return String::new();
        }
        match serde_qs::to_string(self) {
            Ok(qs) if !qs.is_empty() => format!("?{}", qs),
            _ => String::new(),
        }
    }
}

pub fn catalog_path(category: Category) -> String {
    format!("/shop/{}", category.slug())
}

pub fn catalog_href(category: Category, query: &CatalogQuery) -> String {
    format!("{}{}", catalog_path(category), query.to_search())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_search() {
        assert_eq!(CatalogQuery::from_search(""), CatalogQuery::default());
        assert_eq!(CatalogQuery::from_search("?q=latte"), CatalogQuery::new("latte"));
        assert_eq!(
            CatalogQuery::from_search("?utm_source=mail&q=mocha"),
            CatalogQuery::new("mocha")
        );
        assert_eq!(
            CatalogQuery::from_search("?q=caf%C3%A9"),
            CatalogQuery::new("café")
        );
    }

    #[test]
    fn test_to_search_round_trip() {
        let query = CatalogQuery::new("flat white & co");
        let search = query.to_search();
        assert!(search.starts_with("?q="));
        assert_eq!(CatalogQuery::from_search(&search), query);
    }

    #[test]
    fn test_typed_text_keeps_its_spaces() {
        let typed = " flat ";
        let query = CatalogQuery::from_input(typed);
        assert_eq!(query, CatalogQuery::new("flat"));
        assert!(query.describes(typed));
        assert!(CatalogQuery::from_input(" ").describes(""));

        // Back navigation to another query replaces the box text
        assert!(!CatalogQuery::new("latte").describes(typed));
    }

    #[test]
    fn test_blank_query_has_no_search() {
        assert_eq!(CatalogQuery::new("   ").to_search(), "");
        assert_eq!(
            catalog_href(Category::Soup, &CatalogQuery::default()),
            "/shop/soup"
        );
    }
}
