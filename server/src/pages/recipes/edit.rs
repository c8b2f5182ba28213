use crate::error::AppError;
use crate::pages::render;
use crate::render::View;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};

/// A missing recipe still renders the form, with no recipe.
pub async fn edit_recipe_form(
    State(ctx): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let recipe = ctx
        .store
        .get_by_id(&id)
        .await
        .map_err(AppError::LoadRecipe)?;
    render(&ctx, View::Edit { recipe })
}
