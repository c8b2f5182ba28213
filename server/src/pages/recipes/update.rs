use super::RecipeForm;
use crate::error::AppError;
use crate::pages::AFTER_WRITE;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};

pub async fn update_recipe(
    State(ctx): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<RecipeForm>,
) -> Result<Redirect, AppError> {
    ctx.store
        .update_by_id(&id, form.into_changes())
        .await
        .map_err(AppError::UpdateRecipe)?;

    tracing::info!(recipe_id = %id, "recipe updated");
    Ok(Redirect::to(AFTER_WRITE))
}
