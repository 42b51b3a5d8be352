//! Product repository for database operations.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use brandrack_core::{Price, ProductId};

use super::RepositoryError;
use crate::models::{BrandCount, CreateProduct, Product, UpdateProduct};

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    price: Decimal,
    brand: String,
    image: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: Price::new(row.price),
            brand: row.brand,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Internal row type for the brand grouping query.
#[derive(Debug, sqlx::FromRow)]
struct BrandCountRow {
    brand: String,
    count: i64,
}

impl From<BrandCountRow> for BrandCount {
    fn from(row: BrandCountRow) -> Self {
        Self {
            brand: row.brand,
            count: row.count,
        }
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, brand, image, created_at, updated_at
            FROM product
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// List products for one brand (exact match on the stored string),
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_brand(&self, brand: &str) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, brand, image, created_at, updated_at
            FROM product
            WHERE brand = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(brand)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Group products by brand with counts, ordered by brand name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn brand_counts(&self) -> Result<Vec<BrandCount>, RepositoryError> {
        let rows = sqlx::query_as::<_, BrandCountRow>(
            r"
            SELECT brand, COUNT(*) AS count
            FROM product
            GROUP BY brand
            ORDER BY brand ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(BrandCount::from).collect())
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, brand, image, created_at, updated_at
            FROM product
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: CreateProduct) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO product (name, description, price, brand, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, brand, image, created_at, updated_at
            ",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price.amount())
        .bind(&input.brand)
        .bind(&input.image)
        .fetch_one(self.pool)
        .await?;

        Ok(Product::from(row))
    }

    /// Update a product in place. The stored image filename is kept when
    /// `input.image` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the id does not exist.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn update(
        &self,
        id: ProductId,
        input: UpdateProduct,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            UPDATE product
            SET name = $2,
                description = $3,
                price = $4,
                brand = $5,
                image = COALESCE($6, image),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, description, price, brand, image, created_at, updated_at
            ",
        )
        .bind(id.as_i32())
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price.amount())
        .bind(&input.brand)
        .bind(input.image.as_deref())
        .fetch_optional(self.pool)
        .await?;

        row.map(Product::from).ok_or(RepositoryError::NotFound)
    }

    /// Delete a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the id does not exist.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM product WHERE id = $1")
            .bind(id.as_i32())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
