pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use services::backend::BackendClient;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: config::AppConfig) -> Result<Self, errors::AppError> {
        let backend = BackendClient::new(&config)?;
        Ok(Self { config, backend })
    }
}
