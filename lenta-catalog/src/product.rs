use std::collections::HashMap;

use lenta_shared::Product;

/// Display name of the coffee category on lenta.com.
pub const COFFEE_CATEGORY: &str = "Кофе, чай, какао";

/// Catalog path segment of the coffee category.
pub const COFFEE_CATEGORY_SLUG: &str = "kofe-chajj-kakao-242";

const CATALOG_URL: &str = "https://lenta.com/catalog/kofe-chajj-kakao-242/";
const IMAGE_BASE: &str = "https://lenta.com/images/coffee";

/// Base price per SKU, in rubles.
pub type BasePrices = HashMap<String, f64>;

/// (sku, name, brand, description, image file, base price)
const COFFEE: &[(&str, &str, &str, &str, &str, f64)] = &[
    (
        "LT_JACOBS_001",
        "Кофе Jacobs Monarch растворимый 90г",
        "Jacobs",
        "Растворимый кофе премиум качества с богатым ароматом",
        "jacobs_monarch_90g.jpg",
        299.90,
    ),
    (
        "LT_NESCAFE_001",
        "Кофе Nescafe Classic растворимый 150г",
        "Nescafe",
        "Классический растворимый кофе для истинных ценителей",
        "nescafe_classic_150g.jpg",
        245.50,
    ),
    (
        "LT_LAVAZZA_001",
        "Кофе Lavazza Qualita Oro зерно 500г",
        "Lavazza",
        "Кофе в зернах высшего качества, средняя обжарка",
        "lavazza_qualita_oro_500g.jpg",
        1299.00,
    ),
    (
        "LT_PAULIG_001",
        "Кофе Paulig Classic молотый 250г",
        "Paulig",
        "Молотый кофе классической обжарки",
        "paulig_classic_250g.jpg",
        189.90,
    ),
    (
        "LT_EGOISTE_001",
        "Кофе Egoiste Noir растворимый 100г",
        "Egoiste",
        "Премиальный растворимый кофе темной обжарки",
        "egoiste_noir_100g.jpg",
        459.00,
    ),
    (
        "LT_MOSCOW_001",
        "Кофе Московская кофейня на паяхъ зерно 1кг",
        "Московская кофейня на паяхъ",
        "Российский кофе в зернах, традиционная обжарка",
        "moscow_coffee_1kg.jpg",
        899.90,
    ),
    (
        "LT_CARTE_001",
        "Кофе Carte Noire Original растворимый 95г",
        "Carte Noire",
        "Французский растворимый кофе с изысканным вкусом",
        "carte_noire_95g.jpg",
        349.90,
    ),
    (
        "LT_JARDIN_001",
        "Кофе Jardin Ethiopia Sidamo зерно 1кг",
        "Jardin",
        "Эфиопский кофе в зернах одного происхождения",
        "jardin_ethiopia_1kg.jpg",
        1199.00,
    ),
    (
        "LT_TASTER_001",
        "Кофе Taster Choice растворимый 190г",
        "Taster Choice",
        "Растворимый кофе быстрого приготовления",
        "taster_choice_190g.jpg",
        279.90,
    ),
    (
        "LT_AMBASSADOR_001",
        "Кофе Ambassador Blue Label растворимый 95г",
        "Ambassador",
        "Растворимый кофе премиум класса",
        "ambassador_blue_95g.jpg",
        319.90,
    ),
];

/// The coffee products, in catalog order.
pub fn coffee_catalog() -> Vec<Product> {
    COFFEE
        .iter()
        .map(|&(sku, name, brand, description, image, _)| Product {
            sku: sku.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            description: description.to_string(),
            category: COFFEE_CATEGORY.to_string(),
            url: CATALOG_URL.to_string(),
            image: format!("{}/{}", IMAGE_BASE, image),
        })
        .collect()
}

pub fn base_prices() -> BasePrices {
    COFFEE
        .iter()
        .map(|&(sku, _, _, _, _, price)| (sku.to_string(), price))
        .collect()
}
