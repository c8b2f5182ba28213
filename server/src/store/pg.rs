use async_trait::async_trait;
use diesel::prelude::*;

use super::{parse_id, RecipeStore, StoreError};
use crate::db::DbPool;
use crate::models::{NewRecipe, Recipe, RecipeChanges};
use crate::schema::recipes;

/// Postgres-backed store. Diesel is synchronous, so each call runs on the
/// blocking pool with its own pooled connection.
#[derive(Clone)]
pub struct PgRecipeStore {
    pool: DbPool,
}

impl PgRecipeStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn run<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> Result<T, StoreError> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await?
    }
}

#[async_trait]
impl RecipeStore for PgRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        self.run(|conn| {
            Ok(recipes::table
                .select(Recipe::as_select())
                .order(recipes::created_at.asc())
                .load(conn)?)
        })
        .await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let id = parse_id(id)?;
        self.run(move |conn| {
            Ok(recipes::table
                .find(id)
                .select(Recipe::as_select())
                .first(conn)
                .optional()?)
        })
        .await
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        self.run(move |conn| {
            Ok(diesel::insert_into(recipes::table)
                .values(&recipe)
                .returning(Recipe::as_returning())
                .get_result(conn)?)
        })
        .await
    }

    async fn update_by_id(&self, id: &str, changes: RecipeChanges) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        // Diesel rejects an UPDATE with nothing to SET.
        if changes.is_empty() {
            return Ok(());
        }
        self.run(move |conn| {
            let updated = diesel::update(recipes::table.find(id))
                .set(&changes)
                .execute(conn)?;
            if updated == 0 {
                tracing::debug!(%id, "update matched no recipe");
            }
            Ok(())
        })
        .await
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        self.run(move |conn| {
            diesel::delete(recipes::table.find(id)).execute(conn)?;
            Ok(())
        })
        .await
    }
}
