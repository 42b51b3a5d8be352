//! HTTP route handlers for the catalog.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (brand grid with logos)
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing
//! GET  /products/new           - Creation form
//! POST /products               - Create product (multipart, image required)
//! GET  /products/{id}/edit     - Edit form
//! POST /products/{id}          - Update product (multipart, image optional)
//! POST /products/{id}/delete   - Delete product
//!
//! # Brands
//! GET  /brands/{name}          - Products for one brand
//!
//! # Pages
//! GET  /about                  - About page
//! GET  /contact                - Contact page
//! ```

pub mod brands;
pub mod home;
pub mod pages;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/new", get(products::new_product))
        .route("/{id}", post(products::update))
        .route("/{id}/edit", get(products::edit))
        .route("/{id}/delete", post(products::delete))
}

/// Create the brand routes router.
pub fn brand_routes() -> Router<AppState> {
    Router::new().route("/{name}", get(brands::show))
}

/// Create all routes for the catalog.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Brand routes
        .nest("/brands", brand_routes())
        // Static pages
        .route("/about", get(pages::about))
        .route("/contact", get(pages::contact))
}
