//! Home page: brand grid with resolved logos.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::db::ProductRepository;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Brand display data for the home page grid.
#[derive(Debug, Clone)]
pub struct BrandView {
    pub name: String,
    pub count: i64,
    pub image: String,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub brands: Vec<BrandView>,
}

/// Display the brand grid with per-brand product counts and logos.
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let counts = ProductRepository::new(state.pool()).brand_counts().await?;

    let brands = counts
        .into_iter()
        .map(|bc| {
            let resolved = state.logos().resolve_detailed(Some(&bc.brand));
            if resolved.tier.is_miss() {
                tracing::warn!(
                    brand = %bc.brand,
                    image = %resolved.url,
                    "brand has no remote logo mapping, using local/default image"
                );
            }
            BrandView {
                name: bc.brand,
                count: bc.count,
                image: resolved.url,
            }
        })
        .collect();

    Ok(HomeTemplate { brands })
}
