use std::sync::Arc;

use anyhow::Context;

use discover_infra::AppConfig;
use discover_web::app::{build_app, services::AppServices};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    discover_observability::init();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let store = discover_infra::connect(&config.database)
        .await
        .with_context(|| format!("failed to open {} product store", config.database.backend.as_str()))?;

    let app = build_app(Arc::new(AppServices::new(store)));

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
