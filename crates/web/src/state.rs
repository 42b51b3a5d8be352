//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::branding::BrandLogoTable;
use crate::config::WebConfig;
use crate::services::UploadStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the database pool, the immutable
/// brand logo table, and the upload store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: WebConfig,
    pool: PgPool,
    logos: BrandLogoTable,
    uploads: UploadStore,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: WebConfig, pool: PgPool) -> Self {
        let uploads = UploadStore::new(&config.upload_dir);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                logos: BrandLogoTable::builtin(),
                uploads,
            }),
        }
    }

    /// Get a reference to the web configuration.
    #[must_use]
    pub fn config(&self) -> &WebConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the brand logo table.
    #[must_use]
    pub fn logos(&self) -> &BrandLogoTable {
        &self.inner.logos
    }

    /// Get a reference to the upload store.
    #[must_use]
    pub fn uploads(&self) -> &UploadStore {
        &self.inner.uploads
    }
}
