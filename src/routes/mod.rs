//! Route definitions and router assembly.

pub mod auth;
pub mod dashboard;
pub mod health;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::errors::ApiResponse;
use crate::AppState;

/// Build the application router with session resolution, CORS and tracing.
pub fn router(state: AppState) -> Router {
    let session_routes = Router::new()
        .route("/dashboard", get(dashboard::load))
        .route("/api/me", get(auth::me))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::session::resolve_user,
        ));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .merge(session_routes)
        .fallback(not_found)
        .layer(cors_layer(&state.config.frontend_url))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(frontend_url: &str) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    match frontend_url.parse::<HeaderValue>() {
        Ok(origin) => cors.allow_origin(origin),
        Err(e) => {
            tracing::warn!(error = %e, frontend_url, "Invalid FRONTEND_URL, CORS origin not set");
            cors
        }
    }
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        ApiResponse::<()>::error("NOT_FOUND", "Route not found"),
    )
}
