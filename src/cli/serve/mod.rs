//! Serve command

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();

    init_logging(&config.logging);

    let state = crate::create_app_state(&config).await?;
    let router = crate::api::router::create_router(state, &config.cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server address")?;

    info!(%addr, "starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind server address")?;

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
