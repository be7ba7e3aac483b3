use std::{future::Future, net::SocketAddr};

use anyhow::Context;
use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(config: &AppConfig) -> Result<SocketAddr, StartupError> {
    let raw = format!("{}:{}", config.server.host, config.server.port);
    raw.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {raw}: {e}")))
}

/// Prepare media, connect and migrate the database, and assemble the router.
pub async fn build_app(config: AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&config.media.root)
        .await
        .map_err(|e| StartupError::Runtime(format!("{e:#}")))?;

    let db = models::db::connect_with_config(&config.database)
        .await
        .context("connect database")?;
    models::db::migrate(&db).await.context("run migrations")?;

    let state = ServerState::new(db, config);
    Ok(routes::build_router(state, build_cors()))
}

/// Resolves when `signal` fires. A signal source that cannot be set up never
/// resolves, so the server keeps running instead of stopping at once.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!(event = "shutdown_signal", "shutdown requested, draining connections"),
        Err(e) => {
            error!(event = "signal_handler_failed", error = %e, "cannot listen for shutdown signal; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}

/// Serve until `shutdown` resolves, letting in-flight requests finish.
pub async fn run<F>(config: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = bind_addr(&config)?;
    let media_served = config.media.serve;
    let app = build_app(config).await?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(%addr, media_served, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
