use super::handlers::handle_rpc;
use super::{MAX_BODY_SIZE, REQUEST_TIMEOUT_SECS};
use crate::config::GatewayConfig;
use anyhow::{Context, Result};
use axum::{Router, http::StatusCode, routing::post};
use std::time::Duration;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;

/// Returns true when the bind address is not a loopback address.
fn is_public_bind(host: &str) -> bool {
    !matches!(
        host,
        "127.0.0.1" | "localhost" | "::1" | "[::1]" | "0:0:0:0:0:0:0:1"
    )
}

/// The gateway router: a single `POST /` route.
pub fn build_app() -> Router {
    Router::new()
        .route("/", post(handle_rpc))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        ))
}

/// Bind `config.host:config.port` and serve until Ctrl-C.
pub async fn run_gateway(config: &GatewayConfig) -> Result<()> {
    let host = config.host.as_str();
    if is_public_bind(host) && !config.allow_public_bind {
        anyhow::bail!(
            "Refusing to bind the mock gateway to {host}.\n\
             Fix: use --host 127.0.0.1 (default) or set\n\
             [gateway] allow_public_bind = true in config.toml."
        );
    }

    let listener = tokio::net::TcpListener::bind(format!("{host}:{}", config.port))
        .await
        .with_context(|| format!("bind gateway socket on {host}:{}", config.port))?;
    let local = listener
        .local_addr()
        .context("get gateway listener local address")?;

    println!("Mock RPC gateway listening on {local}");
    println!("  POST /  -> fixed verify_card result");

    axum::serve(listener, build_app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serve mock gateway")?;

    tracing::info!("mock gateway stopped");
    Ok(())
}

/// Serve on a pre-bound listener until the task is dropped.
pub async fn run_gateway_with_listener(listener: tokio::net::TcpListener) -> Result<()> {
    let local = listener
        .local_addr()
        .context("get gateway listener local address")?;
    tracing::info!(%local, "mock gateway serving");

    axum::serve(listener, build_app())
        .await
        .context("serve mock gateway")
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
