//! Dashboard route: recent locations and user stats for the overview page.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::errors::ApiResponse;
use crate::middleware::session::RequestContext;
use crate::models::dashboard::{DashboardOutcome, LoginRedirect};
use crate::services::dashboard;
use crate::AppState;

/// GET /dashboard — composed view model, or 302 to the login page.
pub async fn load(State(state): State<AppState>, ctx: RequestContext) -> DashboardOutcome {
    dashboard::load(&state.backend, &ctx, &state.config.login_path).await
}

impl IntoResponse for LoginRedirect {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.location)]).into_response()
    }
}

impl IntoResponse for DashboardOutcome {
    fn into_response(self) -> Response {
        match self {
            DashboardOutcome::Page(view) => ApiResponse::success(view).into_response(),
            DashboardOutcome::Redirect(redirect) => redirect.into_response(),
        }
    }
}
