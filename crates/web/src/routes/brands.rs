//! Brand page: products for a single brand.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, State};

use crate::db::ProductRepository;
use crate::error::Result;
use crate::filters;
use crate::routes::products::ProductView;
use crate::state::AppState;

/// Brand detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "brands/show.html")]
pub struct BrandShowTemplate {
    pub brand: String,
    pub logo: String,
    pub products: Vec<ProductView>,
}

/// Display all products carrying one brand.
///
/// The brand segment matches the stored brand string exactly; an unknown
/// brand renders an empty listing rather than a 404.
pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<BrandShowTemplate> {
    let products = ProductRepository::new(state.pool())
        .list_by_brand(&name)
        .await?;

    let logo = state.logos().resolve(Some(&name));

    Ok(BrandShowTemplate {
        brand: name,
        logo,
        products: products.into_iter().map(ProductView::from).collect(),
    })
}
