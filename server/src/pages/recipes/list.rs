use crate::error::AppError;
use crate::pages::render;
use crate::render::View;
use crate::AppState;
use axum::{extract::State, response::Response};

pub async fn home(State(ctx): State<AppState>) -> Result<Response, AppError> {
    let recipes = ctx.store.list().await.map_err(AppError::ListRecipes)?;
    render(&ctx, View::Home { recipes })
}

pub async fn my_recipes(State(ctx): State<AppState>) -> Result<Response, AppError> {
    let recipes = ctx.store.list().await.map_err(AppError::ListRecipes)?;
    render(&ctx, View::MyRecipes { recipes })
}
