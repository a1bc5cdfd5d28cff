//! Product data model.

use serde::{Deserialize, Serialize};

use crate::facet::{Category, Color, Size, Style};

/// A product as the backend returns it. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub original_price: Option<f64>,
    /// Ordered image list; the first entry seeds the main image display.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub rating: f64,
    /// View count, displayed as the review count.
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub sizes: Vec<Size>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub style: Option<Style>,
}

impl Product {
    /// URL of the product's lead image, if it has one.
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images.first().map(|img| img.url.as_str())
    }

    /// Rating clamped to the 0..=5 star scale, rounded down.
    pub fn star_count(&self) -> u32 {
        self.rating.clamp(0.0, 5.0) as u32
    }
}

/// One entry in a product's image list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: u64,
    pub url: String,
    #[serde(default)]
    pub primary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_backend_shape() {
        let json = r##"{
            "id": 12,
            "name": "Patchwork Throw",
            "description": "Hand-stitched cotton throw.",
            "price": 59.99,
            "originalPrice": 89.99,
            "images": [
                {"id": 1, "url": "https://cdn.example.com/p12-a.jpg", "primary": true},
                {"id": 2, "url": "https://cdn.example.com/p12-b.jpg", "primary": false}
            ],
            "rating": 4.0,
            "views": 87,
            "colors": [{"id": 3, "name": "Red", "hexCode": "#E25663"}],
            "sizes": [{"id": 2, "name": "M"}],
            "category": {"id": 1, "name": "Home & Decor"},
            "style": {"id": 4, "name": "Patchwork"}
        }"##;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.original_price, Some(89.99));
        assert_eq!(
            product.primary_image_url(),
            Some("https://cdn.example.com/p12-a.jpg")
        );
        assert_eq!(product.category.as_ref().unwrap().name, "Home & Decor");
        assert_eq!(product.star_count(), 4);
    }

    #[test]
    fn test_sparse_product_uses_defaults() {
        let json = r#"{"id": 1, "name": "Mug", "price": 9.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.images.is_empty());
        assert!(product.primary_image_url().is_none());
        assert!(product.category.is_none());
        assert_eq!(product.star_count(), 0);
    }

    #[test]
    fn test_star_count_clamps() {
        let json = r#"{"id": 1, "name": "Mug", "price": 9.5, "rating": 7.2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.star_count(), 5);
    }
}
