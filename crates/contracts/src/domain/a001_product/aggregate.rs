use crate::domain::common::{AggregateId, Price};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Types
// ============================================================================

/// Identifier unique within one category's catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(ProductId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Coffee,
    Cake,
    Soup,
    Milkshake,
}

impl Category {
    /// URL slug, also used in the string form of [`ProductKey`]
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Coffee => "coffee",
            Category::Cake => "cake",
            Category::Soup => "soup",
            Category::Milkshake => "milkshake",
        }
    }

    /// Short label for menus
    pub fn label(&self) -> &'static str {
        match self {
            Category::Coffee => "Coffee",
            Category::Cake => "Cakes",
            Category::Soup => "Soups",
            Category::Milkshake => "Milkshakes",
        }
    }

    /// Page heading of the category catalog
    pub fn title(&self) -> &'static str {
        match self {
            Category::Coffee => "Our Coffee Selection",
            Category::Cake => "Our Cake Collection",
            Category::Soup => "Our Soup Selection",
            Category::Milkshake => "Our Milkshake Menu",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Category::Coffee => "Freshly pulled shots and slow brews from our roastery.",
            Category::Cake => "Baked every morning, best enjoyed with a cup of coffee.",
            Category::Soup => "Warm bowls made from scratch, served with fresh bread.",
            Category::Milkshake => "Thick, cold and blended to order.",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "coffee" => Some(Category::Coffee),
            "cake" => Some(Category::Cake),
            "soup" => Some(Category::Soup),
            "milkshake" => Some(Category::Milkshake),
            _ => None,
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Coffee,
            Category::Cake,
            Category::Soup,
            Category::Milkshake,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Identity of a product across every catalog of the shop.
///
/// Catalog ids restart at 1 in every category, so the bare [`ProductId`]
/// is ambiguous outside of a single catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductKey {
    pub category: Category,
    pub id: ProductId,
}

impl ProductKey {
    pub fn new(category: Category, id: ProductId) -> Self {
        Self { category, id }
    }
}

impl AggregateId for ProductKey {
    fn as_string(&self) -> String {
        format!("{}-{}", self.category.slug(), self.id.0)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        let (slug, id) = s
            .rsplit_once('-')
            .ok_or_else(|| format!("Invalid product key: {}", s))?;
        let category =
            Category::from_slug(slug).ok_or_else(|| format!("Unknown category: {}", slug))?;
        let id = ProductId::from_string(id)?;
        Ok(Self { category, id })
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

// ============================================================================
// Product
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub category: Category,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub description: String,
}

impl Product {
    pub fn key(&self) -> ProductKey {
        ProductKey::new(self.category, self.id)
    }

    /// Case-insensitive match of `needle` (already lowercased) against the
    /// name and the description.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug(" Coffee "), Some(Category::Coffee));
        assert_eq!(Category::from_slug("tea"), None);
    }

    #[test]
    fn test_product_key_string_form() {
        let key = ProductKey::new(Category::Milkshake, ProductId(12));
        assert_eq!(key.as_string(), "milkshake-12");
        assert_eq!(ProductKey::from_string("milkshake-12"), Ok(key));
        assert!(ProductKey::from_string("milkshake").is_err());
        assert!(ProductKey::from_string("tea-1").is_err());
        assert!(ProductKey::from_string("cake-x").is_err());
    }

    #[test]
    fn test_keys_differ_across_categories() {
        let coffee = ProductKey::new(Category::Coffee, ProductId(1));
        let cake = ProductKey::new(Category::Cake, ProductId(1));
        assert_ne!(coffee, cake);
    }
}
