//! Product domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use brandrack_core::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID, assigned by the store.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Price in the catalog's display currency.
    pub price: Price,
    /// Brand name as entered by the user (free text, unvalidated).
    pub brand: String,
    /// Stored filename of the uploaded product image.
    pub image: String,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Public URL for the product image.
    #[must_use]
    pub fn image_url(&self) -> String {
        format!("/uploads/{}", self.image)
    }
}

/// Input for creating a product. The image has already been written to
/// disk; only the generated filename is stored.
#[derive(Debug, Clone)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub brand: String,
    pub image: String,
}

/// Input for updating a product in place.
///
/// `image` is `None` when no replacement file was uploaded, in which case
/// the existing stored filename is kept.
#[derive(Debug, Clone)]
pub struct UpdateProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub brand: String,
    pub image: Option<String>,
}

/// A brand with its product count, for the home page grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCount {
    /// Brand name as stored on products.
    pub brand: String,
    /// Number of products carrying this brand.
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_url_prefixes_uploads() {
        let product = Product {
            id: ProductId::new(1),
            name: "Pixel 9".to_string(),
            description: "Phone".to_string(),
            price: "799".parse().expect("price"),
            brand: "Google".to_string(),
            image: "1756500000000.png".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(product.image_url(), "/uploads/1756500000000.png");
    }
}
