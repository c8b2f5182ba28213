//! Recipe persistence.
//!
//! Handlers only see [`RecipeStore`]; the Postgres and in-memory backends are
//! interchangeable behind it.

mod memory;
mod pg;

pub use memory::MemoryRecipeStore;
pub use pg::PgRecipeStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewRecipe, Recipe, RecipeChanges};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Record store unavailable: {0}")]
    Unavailable(#[from] diesel::r2d2::PoolError),

    #[error("Invalid recipe identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("Store task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Identifiers arrive from the URL as opaque strings.
pub fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidIdentifier(id.to_string()))
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Every recipe in insertion order.
    async fn list(&self) -> Result<Vec<Recipe>, StoreError>;

    /// `Ok(None)` when no recipe has this id.
    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError>;

    /// Overwrite the fields present in `changes`. Missing ids are not an error.
    async fn update_by_id(&self, id: &str, changes: RecipeChanges) -> Result<(), StoreError>;

    /// Missing ids are not an error.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
        assert!(matches!(
            parse_id("64b7f0c2e4b0a1a2b3c4d5e6"),
            Err(StoreError::InvalidIdentifier(_))
        ));
    }
}
