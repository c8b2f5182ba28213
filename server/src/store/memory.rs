use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

use super::{parse_id, RecipeStore, StoreError};
use crate::models::{NewRecipe, Recipe, RecipeChanges};

/// In-process store with the same semantics as [`super::PgRecipeStore`].
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryRecipeStore {
    recipes: RwLock<Vec<Recipe>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn list(&self) -> Result<Vec<Recipe>, StoreError> {
        Ok(self
            .recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        let id = parse_id(id)?;
        Ok(self
            .recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, StoreError> {
        let created = Recipe {
            id: Uuid::new_v4(),
            name: recipe.name,
            ingredients: recipe.ingredients,
            steps: recipe.steps,
            image: recipe.image,
            video_link: None,
        };
        self.recipes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(created.clone());
        Ok(created)
    }

    async fn update_by_id(&self, id: &str, changes: RecipeChanges) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        let mut recipes = self.recipes.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(recipe) = recipes.iter_mut().find(|r| r.id == id) {
            changes.apply_to(recipe);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let id = parse_id(id)?;
        self.recipes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|r| r.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::split_ingredients;

    fn new_recipe(name: &str, ingredients: &str) -> NewRecipe {
        NewRecipe {
            name: Some(name.to_string()),
            ingredients: split_ingredients(ingredients),
            steps: Some("Cook it".to_string()),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_preserves_ingredient_order() {
        let store = MemoryRecipeStore::new();
        let created = store
            .create(new_recipe("Omelette", " eggs, butter ,chives"))
            .await
            .unwrap();

        let fetched = store
            .get_by_id(&created.id.to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.ingredients, vec!["eggs", "butter", "chives"]);
        assert_eq!(fetched, created);
        assert!(fetched.video_link.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let store = MemoryRecipeStore::new();
        let created = store.create(new_recipe("Toast", "bread")).await.unwrap();
        let id = created.id.to_string();

        store.delete_by_id(&id).await.unwrap();
        assert!(store.get_by_id(&id).await.unwrap().is_none());

        // Deleting again is a no-op.
        store.delete_by_id(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_merges_present_fields() {
        let store = MemoryRecipeStore::new();
        let created = store.create(new_recipe("Soup", "water, salt")).await.unwrap();
        let id = created.id.to_string();

        store
            .update_by_id(
                &id,
                RecipeChanges {
                    name: Some("Better Soup".to_string()),
                    ingredients: Some(vec!["stock".to_string(), "salt".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let updated = store.get_by_id(&id).await.unwrap().unwrap();
        assert_eq!(updated.name.as_deref(), Some("Better Soup"));
        assert_eq!(updated.ingredients, vec!["stock", "salt"]);
        assert_eq!(updated.steps, created.steps);
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let store = MemoryRecipeStore::new();
        store.create(new_recipe("First", "a")).await.unwrap();
        store.create(new_recipe("Second", "b")).await.unwrap();

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter_map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_invalid_identifier() {
        let store = MemoryRecipeStore::new();
        assert!(matches!(
            store.get_by_id("not-an-id").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            store.delete_by_id("not-an-id").await,
            Err(StoreError::InvalidIdentifier(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_id_update_is_noop() {
        let store = MemoryRecipeStore::new();
        store
            .update_by_id(
                &Uuid::new_v4().to_string(),
                RecipeChanges {
                    name: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }
}
