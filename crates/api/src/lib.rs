//! HTTP API Library
//!
//! axum server exposing the health check and user management routes.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database and run the HTTP server until it stops.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let user_service = user_service_lib::connect_user_service(&config.database).await?;

    let app = create_router(AppState::new(user_service));

    let addr = config.bind_addr()?;
    info!(service = %config.service.service_name, "listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
