use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::error::Error as _;
use thiserror::Error;

use crate::render::RenderError;
use crate::store::StoreError;

/// Handler failures. The display text is all the client ever sees; the
/// underlying cause is only logged.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error fetching recipes")]
    ListRecipes(#[source] StoreError),

    #[error("Error saving recipe")]
    SaveRecipe(#[source] StoreError),

    #[error("Error loading recipe")]
    LoadRecipe(#[source] StoreError),

    #[error("Error updating recipe")]
    UpdateRecipe(#[source] StoreError),

    #[error("Error deleting recipe")]
    DeleteRecipe(#[source] StoreError),

    #[error("Error rendering page")]
    Render(#[from] RenderError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.source() {
            Some(cause) => tracing::error!(error = %self, cause = %cause, "request failed"),
            None => tracing::error!(error = %self, "request failed"),
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_response_hides_cause() {
        let err = AppError::LoadRecipe(StoreError::InvalidIdentifier("abc".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display_is_generic() {
        let err = AppError::DeleteRecipe(StoreError::InvalidIdentifier("abc".to_string()));
        assert_eq!(err.to_string(), "Error deleting recipe");
        assert!(err.source().is_some());
    }
}
