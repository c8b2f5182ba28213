pub mod meal;

use crate::AppState;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the JSON API
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/meal", meal::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(info(title = "Larder", description = "Recipe catalog JSON endpoints"))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![meal::ApiDoc::openapi()];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            spec.components
                .get_or_insert_with(Default::default)
                .schemas
                .extend(module_components.schemas);
        }
    }

    spec
}
