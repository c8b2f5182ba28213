use crate::error::AppError;
use crate::pages::AFTER_WRITE;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Redirect,
};

pub async fn delete_recipe(
    State(ctx): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    ctx.store
        .delete_by_id(&id)
        .await
        .map_err(AppError::DeleteRecipe)?;

    tracing::info!(recipe_id = %id, "recipe deleted");
    Ok(Redirect::to(AFTER_WRITE))
}
