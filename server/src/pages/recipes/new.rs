use crate::error::AppError;
use crate::pages::render;
use crate::render::View;
use crate::AppState;
use axum::{extract::State, response::Response};

pub async fn new_recipe_form(State(ctx): State<AppState>) -> Result<Response, AppError> {
    render(&ctx, View::Add)
}
