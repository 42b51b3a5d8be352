//! CLI subcommand implementations.

pub mod migrate;
pub mod seed;

/// Errors shared by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] brandrack_web::config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Repository error: {0}")]
    Repository(#[from] brandrack_web::db::RepositoryError),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),
}
