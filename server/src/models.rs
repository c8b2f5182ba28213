use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

/// A stored recipe. Serialized in camelCase for the view layer.
#[derive(Queryable, Selectable, Debug, Clone, PartialEq, Serialize)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: Uuid,
    pub name: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Option<String>,
    pub image: Option<String>,
    pub video_link: Option<String>,
}

#[derive(Insertable, Debug, Clone, Default)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe {
    pub name: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Option<String>,
    pub image: Option<String>,
}

/// Field overwrites for an existing recipe. `None` leaves the stored value alone.
#[derive(AsChangeset, Debug, Clone, Default, PartialEq)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<String>,
    pub image: Option<String>,
}

impl RecipeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.ingredients.is_none() && self.steps.is_none() && self.image.is_none()
    }

    /// Apply the overwrites to an in-memory record.
    pub fn apply_to(self, recipe: &mut Recipe) {
        if let Some(name) = self.name {
            recipe.name = Some(name);
        }
        if let Some(ingredients) = self.ingredients {
            recipe.ingredients = ingredients;
        }
        if let Some(steps) = self.steps {
            recipe.steps = Some(steps);
        }
        if let Some(image) = self.image {
            recipe.image = Some(image);
        }
    }
}
