use crate::error::AppError;
use crate::pages::render;
use crate::render::View;
use crate::AppState;
use axum::{
    extract::{Query, State},
    response::Response,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// Meal results followed by drink results. No query, no upstream calls.
pub async fn search(
    State(ctx): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, AppError> {
    let results = match query.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => ctx.catalog.search_all(q).await,
        None => Vec::new(),
    };

    render(&ctx, View::Search { results })
}
