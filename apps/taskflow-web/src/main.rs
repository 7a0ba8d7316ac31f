use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use crud_client::HttpCrudClient;
use domain_tasks::TaskService;
use std::time::Duration;
use tracing::info;

mod config;
mod routes;
mod state;
mod templates;
mod views;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Using CRUD collaborator at {}", config.crud.base_url);

    let backend = HttpCrudClient::new(config.crud.clone())?;
    let state = AppState::new(TaskService::new(backend));

    // Page routes wrapped in the shared middleware stack, plus health
    let router = create_router(routes::router(state));
    let app = router.merge(health_router(config.app));

    info!("Starting TaskFlow web with production-ready shutdown (30s timeout)");

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: draining in-flight page requests");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("TaskFlow web shutdown complete");
    Ok(())
}
