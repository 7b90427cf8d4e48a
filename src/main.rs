// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::distance_service::DistanceService;
use crate::application::transport_repository::TransportRepository;
use crate::infrastructure::api_repository::ApiTransportRepository;
use crate::infrastructure::config::{load_app_config, BackendKind, BackendSettings};
use crate::infrastructure::memory_repository::InMemoryTransportRepository;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_app_config()?;

    // Create repository (infrastructure layer)
    let repository = build_repository(&config.backend).await?;

    // Create services (application layer)
    let state = Arc::new(AppState {
        distance_service: DistanceService::new(repository),
    });

    // Build router (presentation layer)
    let router = build_router(state);

    let addr = config.server.bind_address();
    tracing::info!("Starting transport-distance service on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router).await?;

    Ok(())
}

async fn build_repository(backend: &BackendSettings) -> anyhow::Result<Arc<dyn TransportRepository>> {
    match backend.kind {
        BackendKind::Api => {
            let base_url = backend
                .base_url
                .clone()
                .context("backend.base_url is required for the api backend")?;
            tracing::info!("Using TMS backend at {}", base_url);

            Ok(Arc::new(ApiTransportRepository::new(
                base_url,
                backend.token.clone(),
                Duration::from_secs(backend.timeout_secs),
            )?))
        }
        BackendKind::Memory => {
            let repository = match &backend.fixtures {
                Some(path) => InMemoryTransportRepository::from_fixtures(path).await?,
                None => {
                    tracing::warn!("Memory backend without fixtures, starting empty");
                    InMemoryTransportRepository::default()
                }
            };
            Ok(Arc::new(repository))
        }
    }
}
