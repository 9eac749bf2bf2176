use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use crate::middleware::apply_middleware_stack;

fn parse_bind_address(bind_addr: &str) -> Result<SocketAddr> {
    bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address '{bind_addr}': {e}"))
}

/// Wrap the calculator router with the middleware stack.
///
/// # Errors
/// Fails on an invalid module or CORS configuration.
pub fn build_router(config: &AppConfig) -> Result<Router> {
    let calculator_config: calculator::CalculatorConfig = config
        .module_config_or_default("calculator")
        .context("calculator module config")?;

    let module = calculator::CalculatorModule::new(&calculator_config);
    let router = apply_middleware_stack(module.router(), config)?;
    Ok(router)
}

/// Bind and serve until `cancel` fires.
///
/// # Errors
/// Fails on an invalid config, a bind failure, or a server error.
pub async fn serve(config: &AppConfig, cancel: CancellationToken) -> Result<()> {
    let addr = parse_bind_address(&config.server.bind_addr)?;
    let router = build_router(config)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {addr}");

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully (cancellation)");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
