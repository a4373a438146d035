use crate::domain::a001_product::{catalog, Category, Product, ProductId, ProductKey};
use crate::domain::common::Price;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Persisted record of a liked product.
///
/// The stored shape is `{ "id": 1, "name": "...", "price": 2.5, "image": "..." }`
/// with the price in currency units. `category` is optional: arrays written
/// without it still load, and such entries match any product with the same id.
/// `name` and `image` are display copies and may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    #[serde(with = "price_as_units")]
    pub price: Price,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Favorite {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: Some(product.category),
        }
    }

    pub fn matches(&self, key: ProductKey) -> bool {
        self.id == key.id && self.category.map_or(true, |c| c == key.category)
    }

    /// Full key when the category is known
    pub fn key(&self) -> Option<ProductKey> {
        self.category.map(|c| ProductKey::new(c, self.id))
    }
}

mod price_as_units {
    use crate::domain::common::Price;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(price: &Price, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(f64::from(price.cents()) / 100.0)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Price, D::Error> {
        let units = f64::deserialize(deserializer)?;
        if !units.is_finite() || units < 0.0 {
            return Err(serde::de::Error::custom(format!("invalid price: {}", units)));
        }
        Ok(Price((units * 100.0).round() as u32))
    }
}

/// Result of reading a stored array entry by entry.
#[derive(Debug, Clone, Default)]
pub struct LoadedFavorites {
    pub list: FavoriteList,
    /// One message per entry that could not be read
    pub rejected: Vec<String>,
}

/// The liked set, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteList(Vec<Favorite>);

impl FavoriteList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the stored JSON array, keeping every entry that parses.
    ///
    /// Fails only when the value is not JSON or not an array. A bad entry
    /// is reported in `rejected` and does not take the others down with it.
    pub fn load_json(raw: &str) -> anyhow::Result<LoadedFavorites> {
        let value: serde_json::Value =
            serde_json::from_str(raw).context("favorites are not valid JSON")?;
        let serde_json::Value::Array(entries) = value else {
            bail!("favorites must be a JSON array");
        };

        let mut loaded = LoadedFavorites::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Favorite>(entry) {
                Ok(favorite) => loaded.list.0.push(favorite),
                Err(e) => loaded.rejected.push(format!("entry {}: {}", index, e)),
            }
        }
        Ok(loaded)
    }

    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Self::load_json(raw).map(|loaded| loaded.list)
    }

    /// Parse the stored value, treating an absent or unreadable value as
    /// an empty list.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|r| Self::from_json(r).ok()).unwrap_or_default()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(&self.0).context("failed to serialize favorites")
    }

    pub fn contains(&self, key: ProductKey) -> bool {
        self.0.iter().any(|f| f.matches(key))
    }

    /// Flip the liked state of `product`. Returns the new state.
    pub fn toggle(&mut self, product: &Product) -> bool {
        let key = product.key();
        if self.contains(key) {
            self.remove(key);
            false
        } else {
            self.0.push(Favorite::from_product(product));
            true
        }
    }

    /// Drop every entry matching `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: ProductKey) -> bool {
        let before = self.0.len();
        self.0.retain(|f| !f.matches(key));
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of catalog products shown as liked. This is what the
    /// favorites page lists, which can differ from [`len`](Self::len) for
    /// entries without a category or with ids no longer on the menu.
    pub fn liked_count(&self) -> usize {
        self.liked_keys().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Favorite> {
        self.0.iter()
    }

    /// Catalog keys of everything liked, in insertion order without
    /// duplicates. An entry without a category expands to every catalog
    /// product with its id; ids missing from the catalog are skipped.
    pub fn liked_keys(&self) -> Vec<ProductKey> {
        let mut keys: Vec<ProductKey> = Vec::with_capacity(self.0.len());
        for favorite in &self.0 {
            let candidates: Vec<ProductKey> = match favorite.key() {
                Some(key) => catalog::find(key).map(|p| p.key()).into_iter().collect(),
                None => catalog::all_products()
                    .filter(|p| p.id == favorite.id)
                    .map(|p| p.key())
                    .collect(),
            };
            for key in candidates {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::find;

    fn product(category: Category, id: u32) -> &'static Product {
        find(ProductKey::new(category, ProductId(id))).unwrap()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let latte = product(Category::Coffee, 3);
        let mut favorites = FavoriteList::new();

        assert!(favorites.toggle(latte));
        assert!(favorites.contains(latte.key()));
        assert_eq!(favorites.len(), 1);

        assert!(!favorites.toggle(latte));
        assert!(!favorites.contains(latte.key()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_preserves_insertion_order() {
        let mut favorites = FavoriteList::new();
        favorites.toggle(product(Category::Soup, 3));
        favorites.toggle(product(Category::Coffee, 1));
        favorites.toggle(product(Category::Cake, 5));

        let names: Vec<_> = favorites.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Chicken Noodle Soup", "Espresso", "Tiramisu"]
        );
    }

    #[test]
    fn test_json_shape() {
        let mut favorites = FavoriteList::new();
        favorites.toggle(product(Category::Coffee, 1));

        let json = favorites.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 1);
        assert_eq!(value[0]["name"], "Espresso");
        assert_eq!(value[0]["price"], 2.5);
        assert_eq!(value[0]["category"], "coffee");

        assert_eq!(FavoriteList::from_json(&json).unwrap(), favorites);
    }

    #[test]
    fn test_entries_without_category_match_by_id() {
        let raw = r#"[{"id":10,"name":"Doppio","price":3.4,"image":"doppio.jpg"}]"#;
        let mut favorites = FavoriteList::from_json(raw).unwrap();

        let doppio = product(Category::Coffee, 10);
        assert_eq!(favorites.iter().next().unwrap().price, Price(340));
        assert!(favorites.contains(doppio.key()));
        assert!(favorites.iter().next().unwrap().key().is_none());

        assert!(!favorites.toggle(doppio));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_same_id_other_category_is_not_liked() {
        let mut favorites = FavoriteList::new();
        favorites.toggle(product(Category::Coffee, 2));

        assert!(!favorites.contains(ProductKey::new(Category::Cake, ProductId(2))));
    }

    #[test]
    fn test_parse_guards() {
        assert!(FavoriteList::from_json("not json").is_err());
        assert!(FavoriteList::from_json(r#"{"id":1}"#).is_err());

        let loaded = FavoriteList::load_json(r#"[{"id":"x"}]"#).unwrap();
        assert!(loaded.list.is_empty());
        assert_eq!(loaded.rejected.len(), 1);

        let loaded =
            FavoriteList::load_json(r#"[{"id":1,"name":"A","price":-1,"image":""}]"#).unwrap();
        assert!(loaded.list.is_empty());
        assert!(loaded.rejected[0].starts_with("entry 0:"));

        assert!(FavoriteList::parse_or_default(None).is_empty());
        assert!(FavoriteList::parse_or_default(Some("{broken")).is_empty());
        assert!(FavoriteList::parse_or_default(Some("[]")).is_empty());
    }

    #[test]
    fn test_bad_entry_does_not_drop_the_rest() {
        let raw = r#"[{"id":1,"price":2.5},{"id":3,"price":4},{"id":2,"price":"3.50"}]"#;
        let loaded = FavoriteList::load_json(raw).unwrap();
        assert_eq!(loaded.list.len(), 2);
        assert_eq!(loaded.rejected.len(), 1);
        assert!(loaded.rejected[0].starts_with("entry 2:"));

        // Liking something afterwards keeps what was already there
        let mut favorites = FavoriteList::from_json(raw).unwrap();
        let mocha = product(Category::Coffee, 4);
        assert!(favorites.toggle(mocha));

        let stored = FavoriteList::from_json(&favorites.to_json().unwrap()).unwrap();
        assert_eq!(stored.len(), 3);
        assert!(stored.contains(product(Category::Coffee, 1).key()));
        assert!(stored.contains(product(Category::Coffee, 3).key()));
        assert!(stored.contains(mocha.key()));
    }

    #[test]
    fn test_liked_count_follows_liked_keys() {
        let raw = r#"[
            {"id":9,"name":"Legacy","price":1.0,"image":""},
            {"id":99,"name":"Gone","price":1.0,"image":""}
        ]"#;
        let favorites = FavoriteList::from_json(raw).unwrap();

        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.liked_count(), 3);
        assert_eq!(favorites.liked_count(), favorites.liked_keys().len());
    }

    #[test]
    fn test_remove() {
        let mut favorites = FavoriteList::new();
        let shake = product(Category::Milkshake, 1);
        favorites.toggle(shake);

        assert!(favorites.remove(shake.key()));
        assert!(!favorites.remove(shake.key()));
    }

    #[test]
    fn test_liked_keys() {
        let raw = r#"[
            {"id":2,"name":"Americano","price":3.0,"image":"","category":"coffee"},
            {"id":9,"name":"Legacy","price":1.0,"image":""},
            {"id":99,"name":"Gone","price":1.0,"image":""},
            {"id":9,"name":"Dup","price":1.0,"image":"","category":"cake"}
        ]"#;
        let favorites = FavoriteList::from_json(raw).unwrap();

        let keys: Vec<String> = favorites.liked_keys().iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["coffee-2", "coffee-9", "cake-9", "milkshake-9"]);
    }
}
