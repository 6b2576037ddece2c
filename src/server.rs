//! HTTP server initialization and runtime setup.
//!
//! Builds the item store and policy snapshot, wires the link service and
//! runs the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::repositories::{LinkItemRepository, PolicyRepository};
use crate::infrastructure::memory::InMemoryLinkRepository;
use crate::infrastructure::policy::StaticPolicyRepository;
use crate::routes::app_router;
use crate::state::{AppState, SharedLinkService};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the items file cannot be read or parsed.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let items = match &config.items_file {
        Some(path) => InMemoryLinkRepository::load_from_file(path)
            .await
            .with_context(|| format!("Failed to load items from {path}"))?,
        None => {
            tracing::warn!("No items file configured, starting with an empty store");
            InMemoryLinkRepository::new()
        }
    };

    let item_repository: Arc<dyn LinkItemRepository> = Arc::new(items);
    let policy_repository: Arc<dyn PolicyRepository> =
        Arc::new(StaticPolicyRepository::new(config.policy.clone()));

    let link_service: Arc<SharedLinkService> =
        Arc::new(SharedLinkService::new(item_repository, policy_repository));

    Ok(AppState::new(link_service, config.bypass_param.as_str()))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The items file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;
    let items = state.link_service.item_count().await?;
    tracing::info!(items, "Item store ready");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
