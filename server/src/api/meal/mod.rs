pub mod search;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/meal (mounted at /api/meal)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search::search_by_category))
}

#[derive(OpenApi)]
#[openapi(paths(search::search_by_category))]
pub struct ApiDoc;
