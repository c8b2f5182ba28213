use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use thiserror::Error;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(Error, Debug)]
pub enum DbSetupError {
    #[error("Failed to create database pool: {0}")]
    Pool(#[from] r2d2::PoolError),

    #[error("Failed to run database migrations: {0}")]
    Migration(String),
}

pub fn create_pool(database_url: &str) -> Result<DbPool, DbSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder().build(manager)?;

    // Run pending migrations on startup
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DbSetupError::Migration(e.to_string()))?;
    if !applied.is_empty() {
        tracing::info!(count = applied.len(), "applied database migrations");
    }

    Ok(pool)
}
