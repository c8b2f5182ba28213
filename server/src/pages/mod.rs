pub mod catalog;
pub mod recipes;

use crate::error::AppError;
use crate::render::View;
use crate::AppContext;
use crate::AppState;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::Router;

/// Where every recipe mutation sends the browser afterwards.
pub const AFTER_WRITE: &str = "/myrecipes";

/// Returns the router for the HTML pages
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(recipes::list::home))
        .route("/myrecipes", get(recipes::list::my_recipes))
        .route("/recipes", post(recipes::create::create_recipe))
        .route("/recipes/new", get(recipes::new::new_recipe_form))
        .route(
            "/recipes/{id}",
            put(recipes::update::update_recipe).delete(recipes::delete::delete_recipe),
        )
        .route("/recipes/{id}/edit", get(recipes::edit::edit_recipe_form))
        .route("/search", get(catalog::search::search))
        .route("/recipe/{type}/{id}", get(catalog::detail::recipe_detail))
}

pub(crate) fn render(ctx: &AppContext, view: View) -> Result<Response, AppError> {
    let html = ctx.renderer.render(&view)?;
    Ok(Html(html).into_response())
}
