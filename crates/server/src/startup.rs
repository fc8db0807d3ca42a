use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use service::users::{InMemoryUserStore, UserRepository};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load config from `CONFIG_PATH`/`config.toml`; env vars only when the file is absent.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let cfg = AppConfig::load_and_validate()?;
    info!(host = %cfg.server.host, port = cfg.server.port, "configuration loaded");
    Ok(cfg)
}

/// Router over the given store, with CORS and request tracing.
pub fn build_app(users: Arc<dyn UserRepository>) -> Router {
    routes::build_router(AppState::new(users), build_cors())
}

/// Bind the configured `host:port`; host names are resolved.
pub async fn bind(server: &ServerConfig) -> anyhow::Result<TcpListener> {
    let listener = TcpListener::bind(server.bind_addr()).await?;
    Ok(listener)
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build a fresh store and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    // One store per process, handed to the router as shared state
    let store = InMemoryUserStore::shared();

    // Build router
    let app = build_app(store);

    // Bind and serve until Ctrl+C
    let listener = bind(&cfg.server).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "user store listening");
    serve(listener, app, ctrl_c()).await
}
