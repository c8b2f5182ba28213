use anyhow::Context;
use axum::extract::Request;
use axum::ServiceExt;
use larder_core::{CatalogClient, ReqwestClient};
use larder_server::config::Config;
use larder_server::render::ShellRenderer;
use larder_server::store::{MemoryRecipeStore, PgRecipeStore, RecipeStore};
use larder_server::{api, app, db, telemetry, AppContext, AppState};
use std::env;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    let telemetry = telemetry::init_telemetry();
    let result = run().await;
    if let Err(e) = &result {
        tracing::error!("server exited with error: {e:#}");
    }
    telemetry.shutdown();
    result
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let store: Arc<dyn RecipeStore> = if config.uses_memory_store() {
        tracing::warn!("DATABASE_URL=memory, recipes will not survive a restart");
        Arc::new(MemoryRecipeStore::new())
    } else {
        let database_url = config.database_url.clone();
        let pool = tokio::task::spawn_blocking(move || db::create_pool(&database_url))
            .await
            .context("database setup task panicked")??;
        tracing::info!("Database connected");
        Arc::new(PgRecipeStore::new(pool))
    };

    let http = ReqwestClient::builder()
        .timeout(config.http_timeout)
        .build()
        .context("failed to build HTTP client")?;

    let state: AppState = Arc::new(AppContext {
        store,
        catalog: CatalogClient::new(Arc::new(http), config.catalog.clone()),
        renderer: Arc::new(ShellRenderer::default()),
    });

    let static_dir = config.static_dir.is_dir().then_some(config.static_dir.as_path());
    if static_dir.is_none() {
        tracing::warn!(
            "static directory {} not found, static files disabled",
            config.static_dir.display()
        );
    }

    let app = app(state, static_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    let local_addr = listener.local_addr()?;

    tracing::info!("Server listening on {}", local_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", local_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
