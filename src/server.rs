//! HTTP server initialization and runtime setup.
//!
//! Handles dependency wiring and the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::ContactService;
use crate::config::Config;
use crate::infrastructure::email::ApiMailer;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Email-delivery API client
/// - Contact dispatch service
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The delivery client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mailer = ApiMailer::new(
        config.mailer_api_url.clone(),
        config.mailer_api_key.clone(),
        Duration::from_secs(config.mailer_timeout_seconds),
    )?;

    let contact_service = Arc::new(ContactService::new(
        Arc::new(mailer),
        config.sender.clone(),
        config.recipient.clone(),
    ));

    let state = AppState {
        contact_service,
        mailer_endpoint: config.mailer_api_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
    tracing::info!("Shutting down");
}
