//! Product CRUD route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, State},
    response::Redirect,
};

use brandrack_core::{Price, ProductId};

use crate::db::ProductRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::state::AppState;

/// Product display data for templates.
#[derive(Debug, Clone)]
pub struct ProductView {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub brand: String,
    /// Formatted price for display, e.g. `$19.99`.
    pub price: String,
    /// Raw decimal price for form inputs, e.g. `19.99`.
    pub price_raw: String,
    pub image_url: String,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            price: product.price.display(),
            price_raw: product.price.amount().to_string(),
            image_url: product.image_url(),
            name: product.name,
            description: product.description,
            brand: product.brand,
        }
    }
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub products: Vec<ProductView>,
}

/// Product creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct ProductNewTemplate;

/// Product edit form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct ProductEditTemplate {
    pub product: ProductView,
}

/// Display the product listing page.
pub async fn index(State(state): State<AppState>) -> Result<ProductsIndexTemplate> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(ProductsIndexTemplate {
        products: products.into_iter().map(ProductView::from).collect(),
    })
}

/// Display the product creation form.
pub async fn new_product() -> ProductNewTemplate {
    ProductNewTemplate
}

/// Create a product from the submitted multipart form.
///
/// The image file is required; it is written to the upload store and only
/// the generated filename is persisted.
pub async fn create(State(state): State<AppState>, multipart: Multipart) -> Result<Redirect> {
    let form = ProductForm::read(multipart).await?;
    let fields = form.fields()?;

    let (filename, data) = form
        .image
        .ok_or_else(|| AppError::BadRequest("an image file is required".to_string()))?;
    let image = state.uploads().store(&filename, &data).await?;

    let product = ProductRepository::new(state.pool())
        .create(CreateProduct {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            brand: fields.brand,
            image,
        })
        .await?;

    tracing::info!(id = %product.id, name = %product.name, "product created");
    Ok(Redirect::to("/products"))
}

/// Display the edit form for a product.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ProductEditTemplate> {
    let product = ProductRepository::new(state.pool())
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductEditTemplate {
        product: ProductView::from(product),
    })
}

/// Update a product in place. The image is replaced only when a new file
/// was uploaded.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<Redirect> {
    let form = ProductForm::read(multipart).await?;
    let fields = form.fields()?;

    let image = match form.image {
        Some((filename, data)) => Some(state.uploads().store(&filename, &data).await?),
        None => None,
    };

    let product = ProductRepository::new(state.pool())
        .update(
            ProductId::new(id),
            UpdateProduct {
                name: fields.name,
                description: fields.description,
                price: fields.price,
                brand: fields.brand,
                image,
            },
        )
        .await?;

    tracing::info!(id = %product.id, "product updated");
    Ok(Redirect::to("/products"))
}

/// Delete a product by id.
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Redirect> {
    ProductRepository::new(state.pool())
        .delete(ProductId::new(id))
        .await?;

    tracing::info!(id, "product deleted");
    Ok(Redirect::to("/products"))
}

// =============================================================================
// Multipart Form Parsing
// =============================================================================

/// Raw fields collected from the product multipart form.
#[derive(Debug, Default)]
struct ProductForm {
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    brand: Option<String>,
    /// Original filename and file bytes, present only when a non-empty
    /// file was uploaded.
    image: Option<(String, Vec<u8>)>,
}

/// Validated text fields shared by create and update.
struct ProductFields {
    name: String,
    description: String,
    price: Price,
    brand: String,
}

impl ProductForm {
    /// Drain a multipart body into its known fields; unknown fields are
    /// ignored.
    async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "name" => form.name = Some(read_text(field).await?),
                "description" => form.description = Some(read_text(field).await?),
                "price" => form.price = Some(read_text(field).await?),
                "brand" => form.brand = Some(read_text(field).await?),
                "image" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let data = field.bytes().await.map_err(|e| {
                        AppError::BadRequest(format!("failed to read uploaded file: {e}"))
                    })?;
                    // Browsers send an empty file part when the input was
                    // left blank; treat that as "no new image".
                    if !data.is_empty() {
                        form.image = Some((filename, data.to_vec()));
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validate the text fields, rejecting missing values and unparseable
    /// prices.
    fn fields(&self) -> Result<ProductFields> {
        let name = required(self.name.as_deref(), "name")?;
        let description = required(self.description.as_deref(), "description")?;
        let brand = required(self.brand.as_deref(), "brand")?;
        let raw_price = required(self.price.as_deref(), "price")?;
        let price = raw_price
            .parse::<Price>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        Ok(ProductFields {
            name,
            description,
            price,
            brand,
        })
    }
}

/// Read a text field, mapping decode failures to a 400.
async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed form field: {e}")))
}

/// Require a non-empty text field.
fn required(value: Option<&str>, field: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::BadRequest(format!("missing field: {field}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_blank() {
        assert!(required(None, "name").is_err());
        assert!(required(Some("   "), "name").is_err());
        assert_eq!(required(Some(" Pixel 9 "), "name").expect("value"), "Pixel 9");
    }

    #[test]
    fn test_fields_validation() {
        let form = ProductForm {
            name: Some("Pixel 9".to_string()),
            description: Some("A phone".to_string()),
            price: Some("799.99".to_string()),
            brand: Some("Google".to_string()),
            image: None,
        };
        let fields = form.fields().expect("valid form");
        assert_eq!(fields.price.display(), "$799.99");

        let bad_price = ProductForm {
            price: Some("cheap".to_string()),
            ..form
        };
        assert!(bad_price.fields().is_err());
    }

    #[test]
    fn test_product_view_formats_price_and_image() {
        let product = Product {
            id: ProductId::new(3),
            name: "Galaxy S25".to_string(),
            description: "Flagship".to_string(),
            price: "999.5".parse().expect("price"),
            brand: "Samsung".to_string(),
            image: "1756500000000.webp".to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let view = ProductView::from(product);
        assert_eq!(view.price, "$999.50");
        assert_eq!(view.price_raw, "999.5");
        assert_eq!(view.image_url, "/uploads/1756500000000.webp");
    }
}
