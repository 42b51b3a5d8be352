//! Domain models.

pub mod product;

pub use product::{BrandCount, CreateProduct, Product, UpdateProduct};
