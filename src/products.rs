//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single storefront product.
///
/// Products are owned by the [`Catalog`] and treated as immutable; cart items
/// carry a clone taken at add-time, so later catalog edits never reach back
/// into an existing cart or order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Unit price.
    pub price: Decimal,

    /// Longer marketing copy.
    pub description: String,

    /// Average review rating, 0 to 5.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub review_count: u32,

    /// Image reference for the presentation layer.
    pub image: String,

    /// Category name, e.g. "BBQ" or "Subscriptions".
    pub category: String,

    /// Whether the product appears in the featured carousel.
    pub featured: bool,
}

/// Read-only product catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from the given products.
    pub fn new(products: impl Into<Vec<Product>>) -> Self {
        Catalog {
            products: products.into(),
        }
    }

    /// Look up a product by id.
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products in a category, in catalog order.
    pub fn by_category(&self, category: &str) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.category == category)
    }

    /// The featured subset, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|product| product.featured)
    }

    /// Every product in the catalog.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_products() -> Vec<Product> {
        vec![
            Product {
                id: "1".to_owned(),
                title: "Premium Pulled Pork".to_owned(),
                price: Decimal::new(45_00, 2),
                description: String::new(),
                rating: 4.8,
                review_count: 89,
                image: String::new(),
                category: "BBQ".to_owned(),
                featured: true,
            },
            Product {
                id: "2".to_owned(),
                title: "BBQ Dry Rub Collection".to_owned(),
                price: Decimal::new(35_00, 2),
                description: String::new(),
                rating: 4.6,
                review_count: 67,
                image: String::new(),
                category: "Seasonings".to_owned(),
                featured: false,
            },
        ]
    }

    #[test]
    fn product_lookup_by_id() {
        let catalog = Catalog::new(test_products());

        assert_eq!(
            catalog.product("1").map(|p| p.title.as_str()),
            Some("Premium Pulled Pork")
        );
        assert!(catalog.product("missing").is_none());
    }

    #[test]
    fn by_category_filters_catalog_order() {
        let catalog = Catalog::new(test_products());

        let bbq: Vec<_> = catalog.by_category("BBQ").collect();

        assert_eq!(bbq.len(), 1);
        assert_eq!(bbq.first().map(|p| p.id.as_str()), Some("1"));
    }

    #[test]
    fn featured_subset() {
        let catalog = Catalog::new(test_products());

        let featured: Vec<_> = catalog.featured().collect();

        assert_eq!(featured.len(), 1);
        assert!(featured.iter().all(|p| p.featured));
    }
}
