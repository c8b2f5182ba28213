pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod update;

use larder_core::split_ingredients;
use serde::Deserialize;

use crate::models::{NewRecipe, RecipeChanges};

/// The add/edit form body. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeForm {
    pub name: Option<String>,
    /// Comma-separated.
    pub ingredients: Option<String>,
    pub steps: Option<String>,
    pub image: Option<String>,
}

impl RecipeForm {
    pub fn into_new_recipe(self) -> NewRecipe {
        NewRecipe {
            name: self.name,
            ingredients: self
                .ingredients
                .as_deref()
                .map(split_ingredients)
                .unwrap_or_default(),
            steps: self.steps,
            image: self.image,
        }
    }

    pub fn into_changes(self) -> RecipeChanges {
        RecipeChanges {
            name: self.name,
            ingredients: self.ingredients.as_deref().map(split_ingredients),
            steps: self.steps,
            image: self.image,
        }
    }
}
