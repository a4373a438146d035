//! Hard-coded product catalogs, one literal array per category.

use super::aggregate::{Category, Product, ProductId, ProductKey};
use crate::domain::common::Price;
use once_cell::sync::Lazy;

struct Seed {
    id: u32,
    name: &'static str,
    cents: u32,
    image: &'static str,
    description: &'static str,
}

const fn seed(
    id: u32,
    name: &'static str,
    cents: u32,
    image: &'static str,
    description: &'static str,
) -> Seed {
    Seed {
        id,
        name,
        cents,
        image,
        description,
    }
}

const COFFEE: &[Seed] = &[
    seed(1, "Espresso", 250,
        "https://img.freepik.com/free-photo/caramel-latte-with-chocolade-table_140725-4.jpg?t=st=1727759794~exp=1727763394~hmac=c764d48b2b28767da2c6b996ec20e0d6a5857c19724850db5e46498687e16225&w=740",
        "A strong, rich coffee shot, perfect for a quick pick-me-up."),
    seed(2, "Cappuccino", 350,
        "https://img.freepik.com/free-photo/delicious-organic-latte-macchiato-with-milk_23-2148420329.jpg?t=st=1727761406~exp=1727765006~hmac=10f2d9d7a08693daef2ef87ff4edd99d5bc33e1813adb65c8628d088268239b5&w=1380",
        "Creamy and frothy, a classic Italian coffee with steamed milk."),
    seed(3, "Latte", 400,
        "https://img.freepik.com/free-photo/cold-chocolate-cocktail-with-ice-cream_140725-940.jpg?t=st=1727759865~exp=1727763465~hmac=ad44e2430bff005bce4db484fbef6f2ec22f05b97b41c8c6c28ecb8508c2d909&w=740",
        "Smooth and milky, a comforting coffee drink with a velvety texture."),
    seed(4, "Mocha", 450,
        "https://img.freepik.com/free-photo/delicious-quality-coffee-cup_23-2150691385.jpg?t=st=1727759888~exp=1727763488~hmac=ea5484acf51753db6069801c3df0caa601e5d09a2265109ba218d040acb3e53c&w=1380",
        "A sweet blend of coffee and chocolate, perfect for chocolate lovers."),
    seed(5, "Americano", 300,
        "https://img.freepik.com/free-photo/delicious-quality-coffee-cup_23-2150691389.jpg?t=st=1727759909~exp=1727763509~hmac=615986b69635b1e5a35b3a09347203d49046878d7525a9588f94211a3947ff58&w=1380",
        "A diluted espresso shot, similar to brewed coffee but stronger."),
    seed(6, "Macchiato", 350,
        "https://img.freepik.com/free-photo/assortment-with-frappe-dark-background_23-2148436976.jpg?t=st=1727761354~exp=1727764954~hmac=20b5ddf356f56d12e139084bc8e2c14ad3c71677269de9680db9dc4d09250774&w=740",
        "An espresso with a dollop of foamed milk, rich and creamy."),
    seed(7, "Turkish Coffee", 300,
        "https://img.freepik.com/premium-photo/pouring-turkish-coffee_772702-2136.jpg?w=360",
        "Thick, strong, and unfiltered coffee, traditionally served in small cups."),
    seed(8, "Flat White", 550,
        "https://static.toiimg.com/thumb/86699095.cms?imgsize=59654&width=509&height=340",
        "Velvety microfoam poured over a double shot of espresso, smooth and creamy."),
    seed(9, "Nitro Cold Brew", 450,
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcR_ZcJOr1zaqJ-TkW9Ie1PcNRRrgPDnNSgX9A&s",
        "Cold brew infused with nitrogen, creating a creamy, Guinness-like texture."),
    seed(10, "Doppio", 340,
        "https://lifeboostcoffee.com/cdn/shop/articles/Doppio_Espresso_Macchiato.jpg?v=1655197439",
        "A double shot of espresso, strong and intense, perfect for espresso lovers."),
    seed(11, "Viennese Coffee", 400,
        "https://irepo.primecp.com/2015/10/241007/Vienna-Coffee-01-12-07-OR_Category-CategoryPageDefault_ID-1242862.jpg?v=1242862",
        "Espresso topped with whipped cream, often served with chocolate shavings."),
    seed(12, "Ristretto", 520,
        "https://www.castironketo.net/wp-content/uploads/2023/10/is-ristretto-keto-friendly-header-image.jpg",
        "A short shot of espresso, sweeter and more concentrated than regular espresso."),
    seed(13, "Red Eye", 620,
        "https://www.sessioncoffeedenver.com/wp-content/uploads/2024/04/what-is-a-red-eye-coffee.jpg",
        "A cup of brewed coffee with a shot of espresso, extra strong and caffeinated."),
    seed(14, "Frappé", 820,
        "https://img.sndimg.com/food/image/upload/f_auto,c_thumb,q_55,w_860,ar_3:2/v1/img/recipes/23/29/18/x38TQCFcRRiV1FJYbTLP_coffeefrappe2.jpg",
        "Iced coffee drink blended with milk and sugar, often topped with whipped cream."),
    seed(15, "Affogato", 860,
        "https://static.wixstatic.com/media/6a3e8d_23b343395c7c47feab983d124cc9b4ce~mv2.jpg/v1/fill/w_568,h_770,al_c,q_85,usm_0.66_1.00_0.01,enc_auto/6a3e8d_23b343395c7c47feab983d124cc9b4ce~mv2.jpg",
        "A scoop of vanilla gelato drowned in a shot of hot espresso, sweet and creamy."),
    seed(16, "Cortado", 600,
        "https://cdn.shopify.com/s/files/1/0677/6524/0096/files/coffee-in-a-glass-2022-11-02-18-50-07-utc_600x600.jpg?v=1683831169",
        "Espresso cut with a small amount of warm milk to reduce acidity."),
    seed(17, "Café au Lait", 380,
        "https://blackturtlecoffee.com/cdn/Shop/articles/Cafe-Au-Lait-004.jpg?v=1672848240",
        "Coffee with hot milk, similar to a latte but with a stronger coffee flavor."),
    seed(18, "Café Bombón", 460,
        "https://www.theworktop.com/wp-content/uploads/2021/11/cafe-bombon.jpg",
        "Espresso served with sweetened condensed milk, creating a layered effect."),
    seed(19, "Irish Coffee", 720,
        "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRNlPYx_StS2Y7x9s4hukcCyJZaDm54mgbe8g&s",
        "Coffee with Irish whiskey, sugar, and cream, a warm and boozy treat."),
];

const CAKE: &[Seed] = &[
    seed(1, "Chocolate Fudge Cake", 550, "/static/img/cake.svg",
        "Layers of dark chocolate sponge and fudge frosting."),
    seed(2, "Red Velvet", 500, "/static/img/cake.svg",
        "Soft cocoa sponge with a tangy cream cheese frosting."),
    seed(3, "New York Cheesecake", 600, "/static/img/cake.svg",
        "Dense and creamy baked cheesecake on a buttery biscuit base."),
    seed(4, "Carrot Cake", 450, "/static/img/cake.svg",
        "Spiced carrot and walnut cake finished with cream cheese icing."),
    seed(5, "Tiramisu", 650, "/static/img/cake.svg",
        "Espresso-soaked ladyfingers layered with mascarpone and cocoa."),
    seed(6, "Lemon Drizzle", 400, "/static/img/cake.svg",
        "Light lemon sponge soaked in a zesty sugar syrup."),
    seed(7, "Black Forest", 620, "/static/img/cake.svg",
        "Chocolate sponge with cherries and whipped cream."),
    seed(8, "Coffee Walnut Cake", 480, "/static/img/cake.svg",
        "Coffee sponge with walnut pieces and coffee buttercream."),
    seed(9, "Banana Bread", 350, "/static/img/cake.svg",
        "Moist loaf made with ripe bananas and a hint of cinnamon."),
    seed(10, "Opera Cake", 700, "/static/img/cake.svg",
        "Almond sponge layered with coffee syrup, ganache and buttercream."),
];

const SOUP: &[Seed] = &[
    seed(1, "Tomato Basil Soup", 550, "/static/img/soup.svg",
        "Roasted tomatoes blended with fresh basil and a splash of cream."),
    seed(2, "Cream of Mushroom", 600, "/static/img/soup.svg",
        "Earthy mushrooms simmered in a silky cream broth."),
    seed(3, "Chicken Noodle Soup", 650, "/static/img/soup.svg",
        "A classic comfort bowl with tender chicken and egg noodles."),
    seed(4, "French Onion Soup", 700, "/static/img/soup.svg",
        "Caramelised onions in beef broth topped with a melted cheese crouton."),
    seed(5, "Minestrone", 550, "/static/img/soup.svg",
        "Hearty Italian vegetable soup with beans and pasta."),
    seed(6, "Lentil Soup", 500, "/static/img/soup.svg",
        "Red lentils cooked with cumin, garlic and lemon."),
    seed(7, "Pumpkin Soup", 580, "/static/img/soup.svg",
        "Velvety roasted pumpkin with a touch of nutmeg."),
    seed(8, "Broccoli Cheddar", 620, "/static/img/soup.svg",
        "Broccoli florets in a rich, sharp cheddar soup."),
];

const MILKSHAKE: &[Seed] = &[
    seed(1, "Classic Vanilla Shake", 450, "/static/img/milkshake.svg",
        "Vanilla ice cream blended with whole milk and topped with cream."),
    seed(2, "Chocolate Shake", 480, "/static/img/milkshake.svg",
        "Rich chocolate ice cream and cocoa blended until smooth."),
    seed(3, "Strawberry Shake", 480, "/static/img/milkshake.svg",
        "Fresh strawberries and ice cream, sweet and fruity."),
    seed(4, "Oreo Shake", 550, "/static/img/milkshake.svg",
        "Cookies and cream blended into a thick, crunchy shake."),
    seed(5, "Salted Caramel Shake", 560, "/static/img/milkshake.svg",
        "Caramel sauce and a pinch of sea salt over vanilla ice cream."),
    seed(6, "Banana Shake", 450, "/static/img/milkshake.svg",
        "Ripe bananas blended with milk and a drizzle of honey."),
    seed(7, "Mocha Shake", 580, "/static/img/milkshake.svg",
        "Cold espresso, chocolate and ice cream in one glass."),
    seed(8, "Peanut Butter Shake", 590, "/static/img/milkshake.svg",
        "Creamy peanut butter whipped with vanilla ice cream."),
    seed(9, "Mango Shake", 500, "/static/img/milkshake.svg",
        "Alphonso mango pulp blended with chilled milk."),
];

fn build(category: Category, seeds: &[Seed]) -> Vec<Product> {
    seeds
        .iter()
        .map(|s| Product {
            id: ProductId(s.id),
            category,
            name: s.name.to_string(),
            price: Price(s.cents),
            image: s.image.to_string(),
            description: s.description.to_string(),
        })
        .collect()
}

static COFFEE_CATALOG: Lazy<Vec<Product>> = Lazy::new(|| build(Category::Coffee, COFFEE));
static CAKE_CATALOG: Lazy<Vec<Product>> = Lazy::new(|| build(Category::Cake, CAKE));
static SOUP_CATALOG: Lazy<Vec<Product>> = Lazy::new(|| build(Category::Soup, SOUP));
static MILKSHAKE_CATALOG: Lazy<Vec<Product>> =
    Lazy::new(|| build(Category::Milkshake, MILKSHAKE));

/// The literal product array of a category, in declaration order.
pub fn catalog(category: Category) -> &'static [Product] {
    match category {
        Category::Coffee => &COFFEE_CATALOG,
        Category::Cake => &CAKE_CATALOG,
        Category::Soup => &SOUP_CATALOG,
        Category::Milkshake => &MILKSHAKE_CATALOG,
    }
}

/// Every product of every category, in category order.
pub fn all_products() -> impl Iterator<Item = &'static Product> {
    Category::all().into_iter().flat_map(catalog)
}

pub fn find(key: ProductKey) -> Option<&'static Product> {
    catalog(key.category).iter().find(|p| p.id == key.id)
}

/// Products of `category` whose name or description contains `query`
/// (case-insensitive). A blank query returns the whole catalog.
pub fn search(category: Category, query: &str) -> Vec<&'static Product> {
    let needle = query.trim().to_lowercase();
    catalog(category)
        .iter()
        .filter(|p| needle.is_empty() || p.matches_lowercase(&needle))
        .collect()
}

/// First products of a category, used for the featured strip on the home page.
pub fn featured(category: Category, count: usize) -> &'static [Product] {
    let products = catalog(category);
    &products[..count.min(products.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique_within_each_catalog() {
        for category in Category::all() {
            let products = catalog(category);
            assert!(!products.is_empty(), "{} catalog is empty", category);
            let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
            assert_eq!(ids.len(), products.len(), "duplicate id in {}", category);
            assert!(products.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn test_keys_unique_across_catalogs() {
        let keys: HashSet<_> = all_products().map(|p| p.key()).collect();
        assert_eq!(keys.len(), all_products().count());
    }

    #[test]
    fn test_coffee_catalog_contents() {
        let coffee = catalog(Category::Coffee);
        assert_eq!(coffee.len(), 19);
        assert_eq!(coffee[0].name, "Espresso");
        assert_eq!(coffee[0].price, Price(250));
        assert_eq!(coffee[18].name, "Irish Coffee");
    }

    #[test]
    fn test_find() {
        let doppio = find(ProductKey::new(Category::Coffee, ProductId(10))).unwrap();
        assert_eq!(doppio.name, "Doppio");
        assert_eq!(doppio.price, Price(340));
        assert!(find(ProductKey::new(Category::Soup, ProductId(99))).is_none());
    }

    #[test]
    fn test_search() {
        assert_eq!(search(Category::Coffee, "").len(), 19);
        assert_eq!(search(Category::Coffee, "   ").len(), 19);

        let names: Vec<_> = search(Category::Coffee, "LATTE")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Latte", "Café au Lait"]);

        let by_description = search(Category::Coffee, "whiskey");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Irish Coffee");

        assert!(search(Category::Cake, "espresso-free nonsense").is_empty());
    }

    #[test]
    fn test_every_image_is_reachable() {
        // Local images are served from the frontend's copied `static/` dir
        let static_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../frontend");
        for product in all_products() {
            let image = product.image.as_str();
            if image.starts_with("https://") {
                assert!(!image.contains(char::is_whitespace), "{} image has whitespace", product.key());
                continue;
            }
            let relative = image
                .strip_prefix("/static/")
                .unwrap_or_else(|| panic!("{} image is neither absolute nor static: {}", product.key(), image));
            assert!(
                static_root.join("static").join(relative).is_file(),
                "{} image is not shipped: {}",
                product.key(),
                image
            );
        }
    }

    #[test]
    fn test_featured_is_clamped() {
        assert_eq!(featured(Category::Soup, 3).len(), 3);
        assert_eq!(featured(Category::Soup, 100).len(), catalog(Category::Soup).len());
    }
}
