//! Product type.

use crate::ids::{EntryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Brand or vendor.
    pub brand: String,
    /// Image URLs, primary first.
    pub images: Vec<String>,
    /// Unit price.
    pub price: Money,
    /// Units in stock.
    pub stock: i64,
    /// Average rating out of 5.
    pub rating: Option<f32>,
    /// Number of reviews behind the rating.
    pub review_count: Option<u32>,
    /// Category this product is listed under.
    pub category_id: EntryId,
}

impl Product {
    /// Create a new product with no images, stock or rating.
    pub fn new(
        slug: impl Into<String>,
        sku: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category_id: impl Into<EntryId>,
    ) -> Self {
        let slug = slug.into();
        Self {
            id: ProductId::new(slug.clone()),
            slug,
            sku: sku.into(),
            name: name.into(),
            description: String::new(),
            brand: String::new(),
            images: Vec::new(),
            price,
            stock: 0,
            rating: None,
            review_count: None,
            category_id: category_id.into(),
        }
    }

    /// Check if the product can be ordered.
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// Primary image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Detail page path.
    pub fn href(&self) -> String {
        format!("/product/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn tile() -> Product {
        Product::new(
            "terracotta-tile",
            "TILE-TC-01",
            "Terracotta Floor Tile",
            Money::new(2450, Currency::USD),
            "tiles",
        )
    }

    #[test]
    fn test_new_product() {
        let p = tile();
        assert_eq!(p.id.as_str(), "terracotta-tile");
        assert_eq!(p.href(), "/product/terracotta-tile");
        assert_eq!(p.price_display(), "$24.50");
        assert!(p.primary_image().is_none());
    }

    #[test]
    fn test_stock() {
        let mut p = tile();
        assert!(!p.in_stock());
        p.stock = 12;
        assert!(p.in_stock());
    }
}
