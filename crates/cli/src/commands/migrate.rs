//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! brandrack-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `BRANDRACK_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)
//!
//! Migration files live in `crates/web/migrations/`.

use tracing::info;

use brandrack_web::config::WebConfig;
use brandrack_web::db;

use super::CommandError;

/// Run all pending catalog migrations.
///
/// # Errors
///
/// Returns an error if configuration is missing, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), CommandError> {
    let config = WebConfig::from_env()?;

    info!("Connecting to catalog database...");
    let pool = db::create_pool(&config.database_url).await?;

    info!("Running catalog migrations...");
    sqlx::migrate!("../web/migrations").run(&pool).await?;

    info!("Catalog migrations complete!");
    Ok(())
}
