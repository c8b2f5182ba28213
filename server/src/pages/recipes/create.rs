use super::RecipeForm;
use crate::error::AppError;
use crate::pages::AFTER_WRITE;
use crate::AppState;
use axum::{extract::State, response::Redirect, Form};

pub async fn create_recipe(
    State(ctx): State<AppState>,
    Form(form): Form<RecipeForm>,
) -> Result<Redirect, AppError> {
    let created = ctx
        .store
        .create(form.into_new_recipe())
        .await
        .map_err(AppError::SaveRecipe)?;

    tracing::info!(recipe_id = %created.id, "recipe created");
    Ok(Redirect::to(AFTER_WRITE))
}
