#![recursion_limit = "256"]

mod backend;
mod config;
mod logging;
mod routes;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();

    // Dropping the guard flushes and stops the file writer, so it lives as long as `main`.
    let _log_guard = logging::init(&logging::LogConfig::from_env())?;
    tracing::info!("application startup");

    let config = config::ServerConfig::from_env()?;

    let backend = backend::HttpQueryBackend::new(&config.backend)?;
    tracing::info!(url = backend.url(), "query backend configured");

    let state = state::AppState::new(Arc::new(backend));
    let app = routes::leptos_app(state)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(port = config.port, "crm-assistant listening");
    axum::serve(listener, app).await?;
    Ok(())
}
