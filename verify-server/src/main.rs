//! JPKI Verify Web Server - Signature verification gateway.
//!
//! This binary provides a small web server that:
//! - Accepts signature verification requests on `POST /verify`
//! - Forwards them to the PocketSign Verify API
//! - Returns the signer's identity attributes

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jpki_verify::{router, AppState, Config, ConnectClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("web_server_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        verify_endpoint = %config.verify_endpoint,
        request_timeout_ms = config.request_timeout_ms,
        api_key_configured = config.pocket_sign_api_key.is_some(),
        "config_loaded"
    );

    if config.pocket_sign_api_key.is_none() {
        warn!("pocket_sign_api_key_missing");
    }

    // Create verification client
    let client = ConnectClient::new(
        &config.verify_endpoint,
        Duration::from_millis(config.request_timeout_ms),
    )
    .context("Failed to create verification client")?;
    info!(verify_url = %client.verify_url(), "verification_client_created");

    // Build the router
    let state = AppState::new(config.clone(), Arc::new(client));
    let app = router(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "web_server_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("web_server_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("web_server_shutting_down");
}
