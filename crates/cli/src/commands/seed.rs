//! Seed the catalog with demo products.
//!
//! Inserts a handful of products across several brands so the brand grid
//! and listings have something to show on a fresh database. Seeded rows
//! reference placeholder image filenames; no files are written.

use rust_decimal::Decimal;
use tracing::info;

use brandrack_web::config::WebConfig;
use brandrack_web::db::{self, ProductRepository};
use brandrack_web::models::CreateProduct;

use super::CommandError;

/// Demo products: (name, description, price, brand, image filename).
const DEMO_PRODUCTS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Galaxy S25",
        "Flagship phone with a 6.2\" display.",
        "799.99",
        "Samsung",
        "seed-galaxy-s25.png",
    ),
    (
        "Galaxy A16",
        "Budget phone with a big battery.",
        "199.99",
        "Samsung",
        "seed-galaxy-a16.png",
    ),
    (
        "iPhone 16",
        "Apple's mainline phone.",
        "829.00",
        "Apple",
        "seed-iphone-16.png",
    ),
    (
        "Pixel 9",
        "Google's camera-first phone.",
        "699.00",
        "Google Pixel",
        "seed-pixel-9.png",
    ),
    (
        "Nord 4",
        "Mid-range phone with fast charging.",
        "499.00",
        "OnePlus",
        "seed-nord-4.png",
    ),
];

/// Insert demo products, optionally clearing the table first.
///
/// # Errors
///
/// Returns an error if configuration is missing or database operations
/// fail.
pub async fn run(clear: bool) -> Result<(), CommandError> {
    let config = WebConfig::from_env()?;

    info!("Connecting to catalog database...");
    let pool = db::create_pool(&config.database_url).await?;

    if clear {
        let deleted = sqlx::query("DELETE FROM product")
            .execute(&pool)
            .await?
            .rows_affected();
        info!(deleted, "Cleared existing products");
    }

    let repo = ProductRepository::new(&pool);
    for (name, description, price, brand, image) in DEMO_PRODUCTS {
        let price: Decimal = price
            .parse()
            .map_err(|_| CommandError::InvalidSeed(format!("invalid price for {name}")))?;
        let product = repo
            .create(CreateProduct {
                name: (*name).to_string(),
                description: (*description).to_string(),
                price: price.into(),
                brand: (*brand).to_string(),
                image: (*image).to_string(),
            })
            .await?;
        info!(id = %product.id, name = %product.name, "Seeded product");
    }

    info!("Seeding complete!");
    Ok(())
}
