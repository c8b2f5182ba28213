use crate::error::AppError;
use crate::pages::render;
use crate::render::View;
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};
use larder_core::ItemType;

/// `meal` looks up the meal catalog, any other type the drink catalog.
pub async fn recipe_detail(
    State(ctx): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let kind = ItemType::from_path_segment(&kind);
    let recipe = ctx.catalog.lookup(kind, &id).await;

    render(
        &ctx,
        View::RecipeDetail {
            recipe,
            kind: kind.to_string(),
        },
    )
}
