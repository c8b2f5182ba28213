use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryQuery {
    /// Dish type, e.g. `dessert` or `main course`
    pub q: Option<String>,
}

/// Category search against Spoonacular. Upstream failures yield an empty
/// array, never an error status.
#[utoipa::path(
    get,
    path = "/api/meal",
    tag = "meal",
    params(CategoryQuery),
    responses(
        (status = 200, description = "Raw Spoonacular results, at most 8", body = Vec<serde_json::Value>)
    )
)]
pub async fn search_by_category(
    State(ctx): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Json<Vec<Value>> {
    Json(ctx.catalog.search_by_category(query.q.as_deref()).await)
}
