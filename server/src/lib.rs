pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod method_override;
pub mod models;
pub mod pages;
pub mod render;
pub mod schema;
pub mod store;
pub mod telemetry;

use axum::extract::Request;
use axum::Router;
use larder_core::CatalogClient;
use std::path::Path;
use std::sync::Arc;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::services::ServeDir;
use utoipa_swagger_ui::SwaggerUi;

use render::Renderer;
use store::RecipeStore;

/// Process-wide collaborators, built once at startup.
pub struct AppContext {
    pub store: Arc<dyn RecipeStore>,
    pub catalog: CatalogClient,
    pub renderer: Arc<dyn Renderer>,
}

/// Application state shared across all handlers
pub type AppState = Arc<AppContext>;

/// The servable application: the router behind method override.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Assemble routes, static files and middleware.
pub fn app(state: AppState, static_dir: Option<&Path>) -> App {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let mut router = Router::new()
        .merge(pages::router())
        .merge(api::router())
        .merge(swagger_ui);

    if let Some(dir) = static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    let router = telemetry::with_request_tracing(router.with_state(state));

    MapRequestLayer::new(method_override::apply as fn(Request) -> Request).layer(router)
}
